//! Pokémon TCG catalog client and view state.
//!
//! Provides an HTTP client for the card catalog API and the state machine
//! behind a browse/search/filter screen: paginated card lists, an
//! autocomplete search by name, a single-type filter and a detail view.
//!
//! # Quick start
//!
//! ```no_run
//! use pokemontcg_catalog::{CatalogApi, CatalogClient, CardQuery};
//!
//! # async fn example() -> pokemontcg_catalog::Result<()> {
//! let client = CatalogClient::builder().build()?;
//!
//! let types = client.types().await?;
//! let page = client.cards(CardQuery::new().name("Pikachu")).await?;
//! println!("{} types, {} Pikachu cards", types.len(), page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod header;
pub mod models;
pub mod pagination;
pub mod query;
pub mod render;
pub mod view;

pub use api::CatalogApi;
pub use controller::CatalogController;
pub use error::{CatalogError, Result};
pub use header::Header;
pub use models::{Card, PageResult};
pub use pagination::Pagination;
pub use query::{CardQuery, ClauseJoin};
pub use view::{CatalogView, LoadStatus, PageRequest, PageTicket, QueryState, TypeFilter};

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::TypeList;

// ---------------------------------------------------------------------------
// CatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogClient`].
///
/// Use [`CatalogClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogClientBuilder::build).
pub struct CatalogClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::default_user_agent(),
        }
    }
}

impl CatalogClientBuilder {
    /// Point the client at a different API root.
    ///
    /// Defaults to `https://api.pokemontcg.io/v2`. A trailing slash is
    /// accepted.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// constructed. No request is made.
    pub fn build(self) -> Result<CatalogClient> {
        Url::parse(&self.base_url).map_err(|e| {
            CatalogError::InvalidArgument(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        Ok(CatalogClient {
            http,
            base_url: self.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// HTTP client for the card catalog API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the type list endpoint.
    pub fn types_url(&self) -> Result<Url> {
        parse_url(&config::endpoint(&self.base_url, config::TYPES_PATH))
    }

    /// URL of the card list endpoint for `query`, parameters percent-encoded.
    pub fn cards_url(&self, query: &CardQuery) -> Result<Url> {
        let base = parse_url(&config::endpoint(&self.base_url, config::CARDS_PATH))?;
        Url::parse_with_params(base.as_str(), query.to_pairs())
            .map_err(|e| CatalogError::InvalidArgument(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let resp = self.http.get(url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn types(&self) -> Result<Vec<String>> {
        let list: TypeList = self.get_json(self.types_url()?).await?;
        Ok(list.data)
    }

    async fn cards(&self, query: &CardQuery) -> Result<PageResult> {
        debug!(query = %query.to_query_string(), "fetching card page");
        self.get_json(self.cards_url(query)?).await
    }
}

fn parse_url(s: &str) -> Result<Url> {
    Url::parse(s).map_err(|e| CatalogError::InvalidArgument(format!("invalid URL '{}': {}", s, e)))
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogClient(base_url={})", self.base_url)
    }
}
