//! Internal domain models for catalog search results.
//!
//! These types are OUR types - they don't change when the external API changes.
//! All external API responses get converted into these types via adapters.

/// Decoded result of one catalog search (first page only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPayload {
    /// Candidates in the order the catalog ranked them
    pub candidates: Vec<Candidate>,
}

/// One book record returned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// The catalog's identifier for the book
    pub catalog_id: Option<i64>,
    /// Book title, exactly as reported
    pub title: String,
    /// Credited authors, in catalog order
    pub authors: Vec<AuthorDescriptor>,
    /// Language codes, in catalog order
    pub languages: Vec<String>,
    /// Download count metric
    pub download_count: i64,
}

/// Author as described by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorDescriptor {
    pub name: String,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
}

impl Candidate {
    /// All credited author names joined for display (e.g. "Shelley, Mary; Godwin, William").
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// The first listed language code, or an empty string when none is given.
    pub fn primary_language(&self) -> &str {
        self.languages.first().map(String::as_str).unwrap_or("")
    }
}

/// Errors that can occur while talking to the catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
