//! Read-only listing queries over the local catalog.
//!
//! All results come back in insertion order and are never paginated.
//! An empty result is a normal answer, not an error.

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::db;
use crate::error::Result;
use crate::model::{Author, AuthorWithBooks, Book, BookWithAuthor};

/// Every stored book with its author's name.
pub async fn list_books(pool: &SqlitePool) -> Result<Vec<BookWithAuthor>> {
    Ok(db::all_books_with_author(pool).await?)
}

/// Every stored author with the books they own.
pub async fn list_authors(pool: &SqlitePool) -> Result<Vec<AuthorWithBooks>> {
    let authors = db::all_authors(pool).await?;
    attach_books(pool, authors).await
}

/// Authors alive at some point during `year` (inclusive bounds, no death year = alive).
pub async fn list_authors_alive_in(pool: &SqlitePool, year: i64) -> Result<Vec<AuthorWithBooks>> {
    let authors = db::authors_alive_in(pool, year).await?;
    debug_assert!(authors.iter().all(|a| a.is_alive_in(year)));
    tracing::debug!(year, matches = authors.len(), "Authors alive in year");
    attach_books(pool, authors).await
}

/// Books whose stored language code equals `code` exactly (case-sensitive).
///
/// Any string is accepted; validating it against supported codes is the caller's job.
pub async fn list_books_by_language(pool: &SqlitePool, code: &str) -> Result<Vec<BookWithAuthor>> {
    Ok(db::books_by_language(pool, code).await?)
}

async fn attach_books(pool: &SqlitePool, authors: Vec<Author>) -> Result<Vec<AuthorWithBooks>> {
    if authors.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_author: HashMap<i64, Vec<Book>> = HashMap::new();
    for book in db::all_books(pool).await? {
        by_author.entry(book.author_id).or_default().push(book);
    }

    Ok(authors
        .into_iter()
        .map(|author| AuthorWithBooks {
            books: by_author.remove(&author.id).unwrap_or_default(),
            author,
        })
        .collect())
}
