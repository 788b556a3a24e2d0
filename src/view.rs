//! Catalog view state.
//!
//! [`CatalogView`] is the single state record behind the browse screen. User
//! actions are named transitions on it; a transition that changes what must
//! be fetched hands back a [`PageRequest`] for the caller to perform, and the
//! outcome is fed back through [`CatalogView::receive_page`].
//!
//! Every page request is tagged with a [`PageTicket`]. Only the response for
//! the most recently issued ticket is applied; anything older is dropped, so
//! an early request that resolves late can never overwrite a newer result.

use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::models::{Card, PageResult};
use crate::pagination::Pagination;
use crate::query::{CardQuery, ClauseJoin};

// ---------------------------------------------------------------------------
// TypeFilter
// ---------------------------------------------------------------------------

/// The type filter's current choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// No filter (the "All" option).
    #[default]
    All,
    /// Only cards carrying this type tag.
    Only(String),
}

impl TypeFilter {
    /// Map a select option value to a filter; the empty value is "All".
    pub fn from_option_value(value: &str) -> Self {
        if value.is_empty() {
            TypeFilter::All
        } else {
            TypeFilter::Only(value.to_string())
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            TypeFilter::All => "",
            TypeFilter::Only(t) => t,
        }
    }

    pub fn as_type(&self) -> Option<&str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Only(t) => Some(t),
        }
    }
}

// ---------------------------------------------------------------------------
// QueryState
// ---------------------------------------------------------------------------

/// The inputs that fully determine the next card list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Committed search term; keystrokes that were never committed don't count.
    pub search: Option<String>,
    pub type_filter: TypeFilter,
    /// 1-based.
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: None,
            type_filter: TypeFilter::All,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn to_card_query(&self, join: ClauseJoin) -> CardQuery {
        let mut query = CardQuery::new();
        query.page(self.page).join(join);
        if let Some(name) = &self.search {
            query.name(name);
        }
        if let Some(t) = self.type_filter.as_type() {
            query.types(t);
        }
        query
    }
}

// ---------------------------------------------------------------------------
// Requests and status
// ---------------------------------------------------------------------------

/// Generation tag of a page request. Later requests carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageTicket(u64);

impl PageTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A card list fetch the view wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: PageTicket,
    pub query: CardQuery,
}

/// Lifecycle of the card list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The latest request is outstanding.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed; the previous page, if any, is still shown.
    Failed(String),
}

// ---------------------------------------------------------------------------
// CatalogView
// ---------------------------------------------------------------------------

/// All state of the browse screen.
#[derive(Debug, Default)]
pub struct CatalogView {
    join: ClauseJoin,
    query: QueryState,
    search_input: String,
    status: LoadStatus,
    result: Option<PageResult>,
    types: Vec<String>,
    types_received: bool,
    selected: Option<Card>,
    issued: u64,
    pending: Option<PageTicket>,
}

impl CatalogView {
    /// Create an idle view. `join` decides how search and type clauses are
    /// combined in the `q` expression.
    pub fn new(join: ClauseJoin) -> Self {
        Self {
            join,
            ..Self::default()
        }
    }

    // -- Transitions -------------------------------------------------------

    /// First mount: request the initial page (page 1, no filters).
    ///
    /// The type list fetch has no parameters and no ticket; its outcome goes
    /// to [`receive_types`](Self::receive_types).
    pub fn initialize(&mut self) -> PageRequest {
        self.refresh()
    }

    /// Issue a page request for the current query state.
    ///
    /// Marks the view as loading and supersedes any outstanding request.
    pub fn refresh(&mut self) -> PageRequest {
        self.issued += 1;
        let ticket = PageTicket(self.issued);
        if let Some(old) = self.pending.replace(ticket) {
            debug!(superseded = old.0, by = ticket.0, "page request superseded");
        }
        self.status = LoadStatus::Loading;
        PageRequest {
            ticket,
            query: self.query.to_card_query(self.join),
        }
    }

    /// Echo what the user is typing. Never triggers a fetch.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Commit a search term (a picked suggestion), or clear it with `None`.
    ///
    /// An empty string is treated as a clear. A term must be one of the names
    /// offered by the current page; anything else is rejected with
    /// [`CatalogError::NotFound`] and leaves the state unchanged. Returns a
    /// request only when the committed term actually changed.
    pub fn commit_search(&mut self, value: Option<String>) -> Result<Option<PageRequest>> {
        let value = value.filter(|v| !v.is_empty());
        if self.query.search == value {
            self.search_input = value.unwrap_or_default();
            return Ok(None);
        }
        if let Some(term) = &value {
            if !self.is_offered(term) {
                return Err(CatalogError::NotFound(format!(
                    "'{}' is not among the offered suggestions",
                    term
                )));
            }
        }
        self.search_input = value.clone().unwrap_or_default();
        self.query.search = value;
        Ok(Some(self.refresh()))
    }

    fn is_offered(&self, term: &str) -> bool {
        self.result
            .as_ref()
            .is_some_and(|r| r.distinct_names().contains(&term))
    }

    /// Choose a type filter. [`TypeFilter::All`] clears it.
    ///
    /// The current page is kept as-is.
    pub fn select_type(&mut self, filter: TypeFilter) -> Option<PageRequest> {
        if self.query.type_filter == filter {
            return None;
        }
        self.query.type_filter = filter;
        Some(self.refresh())
    }

    /// Jump to a 1-based page. Bounds are the pagination control's job.
    pub fn change_page(&mut self, page: u32) -> Option<PageRequest> {
        if self.query.page == page {
            return None;
        }
        self.query.page = page;
        Some(self.refresh())
    }

    /// Apply the outcome of a page request.
    ///
    /// Returns `false` when the ticket is not the latest one issued, in which
    /// case nothing changes.
    pub fn receive_page(&mut self, ticket: PageTicket, outcome: Result<PageResult>) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding stale page response"
            );
            return false;
        }
        self.pending = None;
        match outcome {
            Ok(result) => {
                debug!(
                    ticket = ticket.0,
                    count = result.count,
                    total = result.total_count,
                    "page loaded"
                );
                self.result = Some(result);
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                warn!(ticket = ticket.0, error = %e, "card page fetch failed");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Apply the outcome of the one-time type list fetch.
    ///
    /// Duplicates are dropped with order preserved. On failure the list
    /// stays empty, leaving "All" as the only choice. Later deliveries are
    /// ignored.
    pub fn receive_types(&mut self, outcome: Result<Vec<String>>) {
        if self.types_received {
            debug!("type list already received; ignoring");
            return;
        }
        self.types_received = true;
        match outcome {
            Ok(types) => {
                let mut unique: Vec<String> = Vec::with_capacity(types.len());
                for t in types {
                    if !unique.contains(&t) {
                        unique.push(t);
                    }
                }
                self.types = unique;
            }
            Err(e) => warn!(error = %e, "type list fetch failed"),
        }
    }

    /// Select a card from the current page for the detail view.
    ///
    /// The card must be on the current page; no fetch is made.
    pub fn open_detail(&mut self, id: &str) -> Result<&Card> {
        let card = self
            .result
            .as_ref()
            .and_then(|r| r.find(id))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("card '{}' is not on this page", id)))?;
        Ok(&*self.selected.insert(card))
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    // -- Accessors ---------------------------------------------------------

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn clause_join(&self) -> ClauseJoin {
        self.join
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Ticket of the outstanding request, if the latest one hasn't resolved.
    pub fn pending_ticket(&self) -> Option<PageTicket> {
        self.pending
    }

    /// The last accepted page, kept across later failures.
    pub fn page_result(&self) -> Option<&PageResult> {
        self.result.as_ref()
    }

    pub fn cards(&self) -> &[Card] {
        self.result.as_ref().map(|r| r.data.as_slice()).unwrap_or(&[])
    }

    pub fn total_count(&self) -> Option<u64> {
        self.result.as_ref().map(|r| r.total_count)
    }

    /// Page count of the last accepted result; 1 before anything loads.
    pub fn total_pages(&self) -> u32 {
        self.result.as_ref().map(PageResult::total_pages).unwrap_or(1)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.query.page, self.total_pages())
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Choices for the type filter: "All" followed by every known type.
    pub fn type_options(&self) -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(self.types.iter().cloned().map(TypeFilter::Only))
            .collect()
    }

    pub fn selected(&self) -> Option<&Card> {
        self.selected.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Autocomplete suggestions: distinct names on the current page that
    /// contain the typed input, case-insensitively.
    pub fn suggestions(&self) -> Vec<&str> {
        let Some(result) = &self.result else {
            return Vec::new();
        };
        let needle = self.search_input.trim().to_lowercase();
        result
            .distinct_names()
            .into_iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }
}
