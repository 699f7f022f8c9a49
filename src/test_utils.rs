//! Test utilities and fixtures for book-minder tests.
//!
//! This module provides common test helpers, catalog fixtures, and
//! database utilities to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{temp_db, mock_payload};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (pool, _dir) = temp_db().await;
//!     let payload = mock_payload();
//!     // ... test logic
//! }
//! ```

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

use crate::catalog::{AuthorDescriptor, Candidate, SearchPayload};
use crate::model::{NewAuthor, NewBook};

/// Creates a temporary database for testing.
///
/// The database is created in a temporary directory that is automatically
/// cleaned up when the returned `TempDir` is dropped. Migrations are run
/// automatically.
///
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = crate::db::db_url(Some(&db_path));

    let pool = crate::db::init_db(&db_url)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Author descriptor as the catalog would report it.
pub fn descriptor(name: &str, birth: Option<i64>, death: Option<i64>) -> AuthorDescriptor {
    AuthorDescriptor {
        name: name.to_string(),
        birth_year: birth,
        death_year: death,
    }
}

/// Candidate with a single English-language author.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let custom = Candidate {
///     title: "Children of Dune".to_string(),
///     ..mock_candidate()
/// };
/// ```
pub fn mock_candidate() -> Candidate {
    Candidate {
        catalog_id: Some(1),
        title: "Dune".to_string(),
        authors: vec![descriptor("Frank Herbert", Some(1920), Some(1986))],
        languages: vec!["en".to_string()],
        download_count: 500,
    }
}

/// Candidate with the given title and author descriptor.
pub fn candidate_by(title: &str, author: AuthorDescriptor, language: &str) -> Candidate {
    Candidate {
        catalog_id: None,
        title: title.to_string(),
        authors: vec![author],
        languages: vec![language.to_string()],
        download_count: 10,
    }
}

/// Payload holding only [`mock_candidate`].
pub fn mock_payload() -> SearchPayload {
    SearchPayload {
        candidates: vec![mock_candidate()],
    }
}

/// Payload holding the given candidates, in order.
pub fn payload_of(candidates: Vec<Candidate>) -> SearchPayload {
    SearchPayload { candidates }
}

pub fn new_author(name: &str, birth: Option<i64>, death: Option<i64>) -> NewAuthor {
    NewAuthor {
        name: name.to_string(),
        birth_year: birth,
        death_year: death,
    }
}

pub fn new_book(title: &str, author_id: i64, language: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author_id,
        language: language.to_string(),
        download_count: 0,
        author_names: String::new(),
        catalog_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let books = crate::db::all_books(&pool).await.unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_mock_candidate_defaults() {
        let candidate = mock_candidate();
        assert_eq!(candidate.title, "Dune");
        assert_eq!(candidate.authors.len(), 1);
        assert_eq!(candidate.authors[0].name, "Frank Herbert");
        assert_eq!(candidate.primary_language(), "en");
        assert_eq!(candidate.download_count, 500);
    }
}
