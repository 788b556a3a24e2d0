use std::time::Duration;

pub const API_BASE: &str = "https://api.pokemontcg.io/v2";
pub const DOCS_URL: &str = "https://docs.pokemontcg.io";

pub const TYPES_PATH: &str = "types";
pub const CARDS_PATH: &str = "cards";

/// Cards per page. The API accepts other sizes, the catalog view never asks for one.
pub const PAGE_SIZE: u32 = 20;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Join a path onto the API base, tolerating a trailing slash on the base.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}
