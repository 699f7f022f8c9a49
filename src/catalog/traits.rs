//! Trait definition for the external catalog client.
//!
//! The ingestion flow depends on [`CatalogApi`] rather than a concrete
//! client so tests can substitute a canned payload.

use async_trait::async_trait;

use super::domain::{CatalogError, SearchPayload};

/// Trait for catalog search.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search the catalog and return the decoded first page of results.
    async fn search(&self, query: &str) -> Result<SearchPayload, CatalogError>;
}

#[async_trait]
impl CatalogApi for super::gutendex::GutendexClient {
    async fn search(&self, query: &str) -> Result<SearchPayload, CatalogError> {
        self.search(query).await
    }
}
