//! Static branding strip shown above the catalog.

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub link_label: String,
    pub link_href: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: "Pokémon TCG".to_string(),
            link_label: "Documentação".to_string(),
            link_href: config::DOCS_URL.to_string(),
        }
    }
}

impl Header {
    pub fn render(&self) -> String {
        format!(
            "{}  |  {} <{}>",
            self.title, self.link_label, self.link_href
        )
    }
}
