//! The seam between the catalog view and the remote card API.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::PageResult;
use crate::query::CardQuery;

/// Read-only access to the card catalog.
///
/// [`CatalogClient`](crate::CatalogClient) talks HTTP; tests plug in a
/// scripted implementation.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// All type tags the catalog knows about (`GET /types`).
    async fn types(&self) -> Result<Vec<String>>;

    /// One page of cards matching `query` (`GET /cards`).
    async fn cards(&self, query: &CardQuery) -> Result<PageResult>;
}
