//! Catalog module - searches the external book catalog.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Internal types for search results
//! - **API DTOs** (`gutendex/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the Gutendex API
//! - **Traits** (`traits.rs`) - Seam used by ingestion so tests can mock the catalog
//!
//! # Usage
//!
//! ```ignore
//! use book_minder::catalog::{CatalogApi, GutendexClient};
//!
//! let client = GutendexClient::new(&config.catalog)?;
//! let payload = client.search("frankenstein").await?;
//! ```

pub mod domain;
pub mod gutendex;
pub mod traits;

pub use domain::{AuthorDescriptor, Candidate, CatalogError, SearchPayload};
pub use gutendex::GutendexClient;
pub use traits::CatalogApi;
