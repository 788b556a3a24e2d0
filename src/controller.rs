//! Async driver for [`CatalogView`].
//!
//! Performs the fetches the view asks for on the tokio runtime and feeds the
//! outcomes back. Starting a new page request aborts the one it supersedes,
//! and the view's ticket check drops anything that still slips through.
//!
//! All methods that issue requests spawn tasks, so they must be called from
//! within a tokio runtime.
//!
//! # Example
//!
//! ```no_run
//! use pokemontcg_catalog::{CatalogClient, CatalogController, ClauseJoin, TypeFilter};
//!
//! # async fn example() -> pokemontcg_catalog::Result<()> {
//! let client = CatalogClient::builder().build()?;
//! let mut catalog = CatalogController::new(client, ClauseJoin::default());
//!
//! catalog.start();
//! catalog.select_type(TypeFilter::Only("Fire".into()));
//! catalog.settle().await?;
//!
//! for card in catalog.view().cards() {
//!     println!("{} ({})", card.name, card.id);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::CatalogApi;
use crate::error::{CatalogError, Result};
use crate::models::{Card, PageResult};
use crate::query::ClauseJoin;
use crate::view::{CatalogView, PageRequest, PageTicket, TypeFilter};

type PageTask = (PageTicket, JoinHandle<Result<PageResult>>);

/// Owns a [`CatalogView`] and the fetches in flight on its behalf.
pub struct CatalogController<A: CatalogApi + 'static> {
    api: Arc<A>,
    view: CatalogView,
    types_task: Option<JoinHandle<Result<Vec<String>>>>,
    page_task: Option<PageTask>,
    started: bool,
}

impl<A: CatalogApi + 'static> CatalogController<A> {
    pub fn new(api: A, join: ClauseJoin) -> Self {
        Self::with_shared(Arc::new(api), join)
    }

    /// Use an API handle shared with other owners.
    pub fn with_shared(api: Arc<A>, join: ClauseJoin) -> Self {
        Self {
            api,
            view: CatalogView::new(join),
            types_task: None,
            page_task: None,
            started: false,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    // -- Operations --------------------------------------------------------

    /// Fetch the type list (once) and the first page.
    ///
    /// Calling it again is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("starting catalog view");

        let api = Arc::clone(&self.api);
        self.types_task = Some(tokio::spawn(async move { api.types().await }));

        let request = self.view.initialize();
        self.dispatch(request);
    }

    /// Re-fetch the current page without changing the query.
    pub fn refresh(&mut self) {
        let request = self.view.refresh();
        self.dispatch(request);
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.view.set_search_input(text);
    }

    /// Commit a suggested search term or clear it. A term the current page
    /// does not offer is rejected without a fetch.
    pub fn commit_search(&mut self, value: Option<String>) -> Result<()> {
        if let Some(request) = self.view.commit_search(value)? {
            self.dispatch(request);
        }
        Ok(())
    }

    pub fn select_type(&mut self, filter: TypeFilter) {
        if let Some(request) = self.view.select_type(filter) {
            self.dispatch(request);
        }
    }

    pub fn change_page(&mut self, page: u32) {
        if let Some(request) = self.view.change_page(page) {
            self.dispatch(request);
        }
    }

    pub fn open_detail(&mut self, id: &str) -> Result<&Card> {
        self.view.open_detail(id)
    }

    pub fn close_detail(&mut self) {
        self.view.close_detail();
    }

    // -- Completion --------------------------------------------------------

    /// Whether any fetch is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.types_task.is_some() || self.page_task.is_some()
    }

    /// Apply whichever fetches have already finished, without waiting.
    pub async fn apply_finished(&mut self) -> Result<()> {
        if self.types_task.as_ref().is_some_and(JoinHandle::is_finished) {
            self.settle_types().await?;
        }
        if self
            .page_task
            .as_ref()
            .is_some_and(|(_, handle)| handle.is_finished())
        {
            self.settle_page().await?;
        }
        Ok(())
    }

    /// Wait for every outstanding fetch and apply the outcomes.
    ///
    /// Fetch failures land in the view's status; only a task that panicked
    /// surfaces here, as [`CatalogError::Task`].
    pub async fn settle(&mut self) -> Result<()> {
        self.settle_types().await?;
        self.settle_page().await
    }

    async fn settle_types(&mut self) -> Result<()> {
        if let Some(handle) = self.types_task.take() {
            let outcome = handle.await.map_err(|e| CatalogError::Task(e.to_string()))?;
            self.view.receive_types(outcome);
        }
        Ok(())
    }

    async fn settle_page(&mut self) -> Result<()> {
        if let Some((ticket, handle)) = self.page_task.take() {
            let outcome = handle.await.map_err(|e| CatalogError::Task(e.to_string()))?;
            self.view.receive_page(ticket, outcome);
        }
        Ok(())
    }

    fn dispatch(&mut self, request: PageRequest) {
        if let Some((old, handle)) = self.page_task.take() {
            debug!(ticket = old.generation(), "aborting superseded page fetch");
            handle.abort();
        }
        let api = Arc::clone(&self.api);
        let PageRequest { ticket, query } = request;
        let handle = tokio::spawn(async move { api.cards(&query).await });
        self.page_task = Some((ticket, handle));
    }
}
