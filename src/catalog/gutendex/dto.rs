//! Gutendex API Data Transfer Objects
//!
//! These types match what the Gutendex API returns for `/books/?search=`.
//! DO NOT use these types outside the gutendex module - convert to domain types.
//!
//! API Reference: https://gutendex.com/

use serde::{Deserialize, Serialize};

/// One page of book search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Total number of matching books across all pages
    pub count: u64,
    /// URL of the next page (not followed)
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Books on this page
    #[serde(default)]
    pub results: Vec<BookResult>,
}

/// A book entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookResult {
    /// Project Gutenberg ID
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub translators: Vec<Person>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub bookshelves: Vec<String>,
    /// Two-letter language codes
    #[serde(default)]
    pub languages: Vec<String>,
    /// `null` when the copyright status is unknown
    pub copyright: Option<bool>,
    pub media_type: Option<String>,
    #[serde(default)]
    pub download_count: u64,
}

/// Author or translator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Person {
    /// Usually "Last, First"
    pub name: String,
    /// May be negative for BCE
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
}

/// Error response from Gutendex
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub detail: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
