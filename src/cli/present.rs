//! Text formatting and user-input validation for the console front end.
//!
//! Core modules hand back plain values; everything the user actually reads
//! is produced here.

use crate::error::{Error, Result};
use crate::ingest::IngestOutcome;
use crate::model::{Author, AuthorWithBooks, Book, BookWithAuthor};

/// Language codes the front end lets users filter by.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("es", "Spanish"),
    ("en", "English"),
    ("fr", "French"),
    ("pt", "Portuguese"),
];

/// Normalize and validate a language code typed by the user.
pub fn parse_language(input: &str) -> Result<String> {
    let code = input.trim().to_lowercase();
    if SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code) {
        Ok(code)
    } else {
        Err(Error::invalid_input(format!(
            "unsupported language '{}' (expected one of: {})",
            input.trim(),
            supported_codes()
        )))
    }
}

/// Parse a year typed by the user.
pub fn parse_year(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::invalid_input(format!("'{}' is not a year", input.trim())))
}

pub fn supported_codes() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(c, _)| *c)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Menu-style listing of supported languages.
pub fn language_prompt() -> String {
    let mut prompt = String::from("Enter the language to search books for:");
    for (code, name) in SUPPORTED_LANGUAGES {
        prompt.push_str(&format!("\n{} - {}", code, name));
    }
    prompt
}

fn or_unknown(year: Option<i64>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "unknown".to_string())
}

fn book_block(title: &str, author: &str, language: &str, downloads: i64) -> String {
    format!(
        "----- BOOK -----\nTitle: {}\nAuthor: {}\nLanguage: {}\nDownloads: {}\n----------------",
        title, author, language, downloads
    )
}

pub fn format_book(book: &BookWithAuthor) -> String {
    book_block(&book.title, &book.author_name, &book.language, book.download_count)
}

fn format_stored_book(book: &Book, author: &Author) -> String {
    book_block(&book.title, &author.name, &book.language, book.download_count)
}

pub fn format_author(entry: &AuthorWithBooks) -> String {
    format!(
        "Author: {}\nBorn: {}\nDied: {}\nBooks: [{}]",
        entry.author.name,
        or_unknown(entry.author.birth_year),
        or_unknown(entry.author.death_year),
        entry.titles().join(", ")
    )
}

/// Message shown after a search.
pub fn describe_outcome(outcome: &IngestOutcome) -> String {
    match outcome {
        IngestOutcome::NoResult => "Book not found".to_string(),
        IngestOutcome::AlreadyRegistered { existing } => {
            format!("Book already registered: {}", existing.title)
        }
        IngestOutcome::AuthorMissing { title } => {
            format!("Author not found for: {}", title)
        }
        IngestOutcome::Registered {
            book,
            author,
            author_was_new,
        } => {
            let note = if *author_was_new {
                "New author registered"
            } else {
                "Linked to existing author"
            };
            format!("{}\n{}", format_stored_book(book, author), note)
        }
    }
}
