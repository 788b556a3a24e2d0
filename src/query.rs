//! Card list query construction.
//!
//! Builds the `page`, `pageSize` and `q` parameters of `GET /cards`. The `q`
//! expression is assembled from a `name:` clause and a `types:` clause.
//! Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use pokemontcg_catalog::CardQuery;
//! let query = CardQuery::new()
//!     .name("Pikachu")
//!     .types("Lightning")
//!     .page(2)
//!     .clone();
//! assert_eq!(
//!     query.to_query_string(),
//!     "page=2&pageSize=20&q=name:Pikachutypes:Lightning"
//! );
//! ```

use crate::config::PAGE_SIZE;

/// How the `name:` and `types:` clauses are joined when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseJoin {
    /// Clauses are written back to back with no separator
    /// (`name:Pikachutypes:Lightning`). This is what the catalog has always
    /// sent.
    #[default]
    Concatenate,
    /// Clauses are separated by a single space, the API's documented
    /// conjunction (`name:Pikachu types:Lightning`).
    Space,
}

impl ClauseJoin {
    fn separator(self) -> &'static str {
        match self {
            ClauseJoin::Concatenate => "",
            ClauseJoin::Space => " ",
        }
    }
}

/// Parameters of one card list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    page_val: u32,
    page_size_val: u32,
    name_val: Option<String>,
    types_val: Option<String>,
    join: ClauseJoin,
}

impl Default for CardQuery {
    fn default() -> Self {
        Self {
            page_val: 1,
            page_size_val: PAGE_SIZE,
            name_val: None,
            types_val: None,
            join: ClauseJoin::default(),
        }
    }
}

impl CardQuery {
    /// First page, default page size, no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by card name. An empty string clears the filter.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name_val = non_empty(name);
        self
    }

    /// Filter by a single type tag. An empty string clears the filter.
    pub fn types(&mut self, type_tag: &str) -> &mut Self {
        self.types_val = non_empty(type_tag);
        self
    }

    pub fn page(&mut self, page: u32) -> &mut Self {
        self.page_val = page;
        self
    }

    pub fn page_size(&mut self, n: u32) -> &mut Self {
        self.page_size_val = n;
        self
    }

    pub fn join(&mut self, join: ClauseJoin) -> &mut Self {
        self.join = join;
        self
    }

    pub fn current_page(&self) -> u32 {
        self.page_val
    }

    pub fn current_page_size(&self) -> u32 {
        self.page_size_val
    }

    /// The `q` expression, or `None` when no filter is set.
    pub fn q(&self) -> Option<String> {
        let mut clauses = Vec::with_capacity(2);
        if let Some(name) = &self.name_val {
            clauses.push(format!("name:{}", name));
        }
        if let Some(t) = &self.types_val {
            clauses.push(format!("types:{}", t));
        }
        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(self.join.separator()))
        }
    }

    /// Query parameters in request order, ready for `RequestBuilder::query`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page_val.to_string()),
            ("pageSize", self.page_size_val.to_string()),
        ];
        if let Some(q) = self.q() {
            pairs.push(("q", q));
        }
        pairs
    }

    /// Unencoded query string, e.g. `page=1&pageSize=20&q=name:Pikachu`.
    ///
    /// The wire form is percent-encoded by the HTTP client; this form is what
    /// gets logged and compared.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
