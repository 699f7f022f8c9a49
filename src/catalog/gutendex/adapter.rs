//! Adapter layer: Convert Gutendex DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::catalog::domain::{AuthorDescriptor, Candidate, SearchPayload};

/// Convert a search response page into a payload, preserving result order.
pub fn to_payload(response: dto::SearchResponse) -> SearchPayload {
    SearchPayload {
        candidates: response.results.into_iter().map(to_candidate).collect(),
    }
}

fn to_candidate(book: dto::BookResult) -> Candidate {
    Candidate {
        catalog_id: Some(book.id),
        title: book.title,
        authors: book.authors.into_iter().map(to_descriptor).collect(),
        languages: book.languages,
        // Gutendex counts fit comfortably; saturate rather than wrap
        download_count: i64::try_from(book.download_count).unwrap_or(i64::MAX),
    }
}

fn to_descriptor(person: dto::Person) -> AuthorDescriptor {
    AuthorDescriptor {
        name: person.name,
        birth_year: person.birth_year,
        death_year: person.death_year,
    }
}
