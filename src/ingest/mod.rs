//! Ingestion - turns one catalog search result into local Author/Book records.
//!
//! Flow for a single payload:
//! 1. Take the first candidate ([`first_candidate`]); the catalog's ranking is trusted as-is
//! 2. Stop if a book with the exact same title is already stored
//! 3. Take the first credited author ([`first_author`]); co-authors are only kept as display text
//! 4. Reuse the stored author with that exact name, or create one
//! 5. Store the book, owned by that author
//!
//! Steps 2-5 run inside one transaction. Dropping the transaction on any
//! early return or error rolls back, so a failed book insert never leaves a
//! freshly created author behind.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::catalog::{AuthorDescriptor, CatalogApi, Candidate, SearchPayload};
use crate::db;
use crate::error::Result;
use crate::model::{Author, Book, NewAuthor, NewBook};

/// What happened to a payload.
///
/// Only `Registered` writes anything; every other outcome leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The catalog returned no candidates
    NoResult,
    /// A book with the first candidate's title is already stored
    AlreadyRegistered { existing: Book },
    /// The first candidate credits no author, so there is nothing to own the book
    AuthorMissing { title: String },
    /// A new book was stored
    Registered {
        book: Book,
        author: Author,
        /// False when an already stored author was reused
        author_was_new: bool,
    },
}

/// Tie-break rule: only the catalog's top-ranked candidate is ingested.
pub fn first_candidate(payload: &SearchPayload) -> Option<&Candidate> {
    payload.candidates.first()
}

/// Tie-break rule: only the first credited author owns the book.
pub fn first_author(candidate: &Candidate) -> Option<&AuthorDescriptor> {
    candidate.authors.first()
}

/// Ingest the first candidate of `payload` into the store.
pub async fn ingest(pool: &SqlitePool, payload: &SearchPayload) -> Result<IngestOutcome> {
    let Some(candidate) = first_candidate(payload) else {
        info!("Catalog returned no candidates");
        return Ok(IngestOutcome::NoResult);
    };

    let mut tx = pool.begin().await?;

    if let Some(existing) = db::find_book_by_title(&mut *tx, &candidate.title).await? {
        info!(title = %candidate.title, id = existing.id, "Book already registered");
        return Ok(IngestOutcome::AlreadyRegistered { existing });
    }

    let Some(descriptor) = first_author(candidate) else {
        info!(title = %candidate.title, "Candidate has no author");
        return Ok(IngestOutcome::AuthorMissing {
            title: candidate.title.clone(),
        });
    };

    let (author, author_was_new) = match db::find_author_by_name(&mut *tx, &descriptor.name).await? {
        Some(existing) => {
            // Stored years win over whatever this payload says
            debug!(name = %existing.name, id = existing.id, "Reusing author");
            (existing, false)
        }
        None => {
            let created = db::save_author(&mut *tx, &new_author(descriptor)).await?;
            debug!(name = %created.name, id = created.id, "Created author");
            (created, true)
        }
    };

    let book = db::save_book(&mut *tx, &new_book(candidate, author.id)).await?;
    tx.commit().await?;

    info!(
        title = %book.title,
        author = %author.name,
        author_was_new,
        "Registered book"
    );

    Ok(IngestOutcome::Registered {
        book,
        author,
        author_was_new,
    })
}

/// Search the catalog for `query` and ingest the result.
///
/// Catalog failures propagate unchanged; nothing is written in that case.
pub async fn search_and_ingest<C>(catalog: &C, pool: &SqlitePool, query: &str) -> Result<IngestOutcome>
where
    C: CatalogApi + ?Sized,
{
    let payload = catalog.search(query).await?;
    debug!(query, candidates = payload.candidates.len(), "Catalog search done");
    ingest(pool, &payload).await
}

fn new_author(descriptor: &AuthorDescriptor) -> NewAuthor {
    NewAuthor {
        name: descriptor.name.clone(),
        birth_year: descriptor.birth_year,
        death_year: descriptor.death_year,
    }
}

fn new_book(candidate: &Candidate, author_id: i64) -> NewBook {
    NewBook {
        title: candidate.title.clone(),
        author_id,
        language: candidate.primary_language().to_string(),
        download_count: candidate.download_count,
        author_names: candidate.author_names(),
        catalog_id: candidate.catalog_id,
    }
}
