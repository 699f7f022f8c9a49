//! Core data models for the book catalog.
//!
//! Defines the primary entities: [`Author`] and [`Book`], plus the joined
//! views used for listing ([`BookWithAuthor`], [`AuthorWithBooks`]).
//! These are derived from SQLx for database mapping.
//!
//! # Database Schema
//!
//! The models map to the following tables:
//! - `authors` - Author records with unique names
//! - `books` - Books with unique titles and a mandatory author reference

use sqlx::FromRow;

/// An author in the local catalog.
///
/// Birth and death years are captured from the first payload that mentions
/// the author and are never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Author {
    /// Database ID (auto-generated)
    pub id: i64,
    /// Author name (unique, exact match)
    pub name: String,
    /// Year of birth, if the catalog knows it
    pub birth_year: Option<i64>,
    /// Year of death, if any
    pub death_year: Option<i64>,
}

impl Author {
    /// Whether this author was alive at some point during `year`.
    ///
    /// An author without a death year is presumed alive from birth onwards.
    /// An author without a birth year never matches.
    pub fn is_alive_in(&self, year: i64) -> bool {
        match self.birth_year {
            Some(birth) => birth <= year && self.death_year.is_none_or(|death| death >= year),
            None => false,
        }
    }
}

/// An author that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
}

/// A book in the local catalog.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    /// Database ID (auto-generated)
    pub id: i64,
    /// Book title (unique, exact match)
    pub title: String,
    /// Foreign key to authors table
    pub author_id: i64,
    /// First language code reported by the catalog (e.g. "en")
    pub language: String,
    /// Download count reported by the catalog at ingestion time
    pub download_count: i64,
    /// Every credited author name, joined for display
    pub author_names: String,
    /// The catalog's own identifier for this book
    pub catalog_id: Option<i64>,
}

/// A book that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author_id: i64,
    pub language: String,
    pub download_count: i64,
    pub author_names: String,
    pub catalog_id: Option<i64>,
}

/// Book with its owning author's name joined in.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookWithAuthor {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub download_count: i64,
    pub author_id: i64,
    pub author_name: String,
}

/// Author together with the books they own, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<Book>,
}

impl AuthorWithBooks {
    /// Titles of the owned books, for display.
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.title.as_str()).collect()
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any year inside [birth, death] is alive, anything outside is not
        #[test]
        fn alive_matches_closed_interval(
            birth in -500i64..2100,
            span in 0i64..120,
            year in -700i64..2300,
        ) {
            let a = Author {
                id: 1,
                name: "Someone".to_string(),
                birth_year: Some(birth),
                death_year: Some(birth + span),
            };
            let expected = year >= birth && year <= birth + span;
            prop_assert_eq!(a.is_alive_in(year), expected);
        }

        /// Without a death year every year from birth onwards is alive
        #[test]
        fn open_ended_alive_from_birth(birth in -500i64..2100, offset in 0i64..1000) {
            let a = Author {
                id: 1,
                name: "Someone".to_string(),
                birth_year: Some(birth),
                death_year: None,
            };
            prop_assert!(a.is_alive_in(birth + offset));
            prop_assert!(!a.is_alive_in(birth - 1));
        }
    }
}
