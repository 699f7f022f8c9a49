//! Listing commands over the local store.

use std::io::Write;

use super::Session;
use crate::cli::present;
use crate::query;

/// List all registered books
pub async fn cmd_books<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let books = query::list_books(&session.pool).await?;
    if books.is_empty() {
        writeln!(out, "No books registered yet")?;
    }
    for book in &books {
        writeln!(out, "{}\n", present::format_book(book))?;
    }
    Ok(())
}

/// List all registered authors
pub async fn cmd_authors<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let authors = query::list_authors(&session.pool).await?;
    if authors.is_empty() {
        writeln!(out, "No authors registered yet")?;
    }
    for entry in &authors {
        writeln!(out, "{}\n", present::format_author(entry))?;
    }
    Ok(())
}

/// List authors alive in the given year
pub async fn cmd_alive<W: Write>(session: &Session, year: &str, out: &mut W) -> anyhow::Result<()> {
    let year = present::parse_year(year)?;
    let authors = query::list_authors_alive_in(&session.pool, year).await?;
    if authors.is_empty() {
        writeln!(out, "No registered authors alive in {}", year)?;
    }
    for entry in &authors {
        writeln!(out, "{}\n", present::format_author(entry))?;
    }
    Ok(())
}

/// List books in the given language
pub async fn cmd_language<W: Write>(session: &Session, code: &str, out: &mut W) -> anyhow::Result<()> {
    let code = present::parse_language(code)?;
    let books = query::list_books_by_language(&session.pool, &code).await?;
    if books.is_empty() {
        writeln!(out, "No registered books in '{}'", code)?;
    }
    for book in &books {
        writeln!(out, "{}\n", present::format_book(book))?;
    }
    Ok(())
}
