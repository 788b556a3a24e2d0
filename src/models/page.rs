use serde::{Deserialize, Serialize};

use crate::config::PAGE_SIZE;
use crate::models::card::Card;
use crate::pagination;

// ---------------------------------------------------------------------------
// PageResult — envelope of GET /cards
// ---------------------------------------------------------------------------

/// One page of cards plus the pagination metadata the API reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u64,
}

impl PageResult {
    /// Number of pages for this result's total, never less than one.
    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total_count, PAGE_SIZE)
    }

    pub fn find(&self, id: &str) -> Option<&Card> {
        self.data.iter().find(|c| c.id == id)
    }

    /// Distinct card names in page order.
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.data.len());
        for card in &self.data {
            if !names.contains(&card.name.as_str()) {
                names.push(&card.name);
            }
        }
        names
    }
}

// ---------------------------------------------------------------------------
// TypeList — envelope of GET /types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeList {
    #[serde(default)]
    pub data: Vec<String>,
}
