//! Database module for author and book persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides async operations for:
//! - Exact-match lookups used by ingestion dedupe
//! - Author and book creation (there are no update or delete operations)
//! - Listing queries in insertion order
//!
//! Lookup and save functions accept any SQLite executor so ingestion can run
//! them inside a single transaction.
//!
//! # Example
//!
//! ```ignore
//! use book_minder::db::{init_db, all_books_with_author};
//!
//! let pool = init_db("sqlite:books.db").await?;
//! let books = all_books_with_author(&pool).await?;
//! ```

use std::path::Path;

use crate::model::{Author, Book, BookWithAuthor, NewAuthor, NewBook};
use sqlx::SqliteExecutor;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "book_minder.db";

const BOOK_COLUMNS: &str = "id, title, author_id, language, download_count, author_names, catalog_id";

const BOOK_WITH_AUTHOR_SELECT: &str = r#"
    SELECT b.id, b.title, b.language, b.download_count, b.author_id, a.name AS author_name
    FROM books b
    JOIN authors a ON b.author_id = a.id
"#;

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

// ============================================================================
// Dedupe lookups
// ============================================================================

/// Find a book by exact (case-sensitive) title.
pub async fn find_book_by_title<'e>(
    executor: impl SqliteExecutor<'e>,
    title: &str,
) -> sqlx::Result<Option<Book>> {
    sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE title = ?"))
        .bind(title)
        .fetch_optional(executor)
        .await
}

/// Find an author by exact (case-sensitive) name.
pub async fn find_author_by_name<'e>(
    executor: impl SqliteExecutor<'e>,
    name: &str,
) -> sqlx::Result<Option<Author>> {
    sqlx::query_as::<_, Author>(
        "SELECT id, name, birth_year, death_year FROM authors WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(executor)
    .await
}

// ============================================================================
// Creation
// ============================================================================

/// Insert a new author and return the stored record with its assigned ID.
///
/// Fails with a unique constraint violation if the name is already taken.
pub async fn save_author<'e>(
    executor: impl SqliteExecutor<'e>,
    author: &NewAuthor,
) -> sqlx::Result<Author> {
    sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO authors (name, birth_year, death_year)
        VALUES (?, ?, ?)
        RETURNING id, name, birth_year, death_year
        "#,
    )
    .bind(&author.name)
    .bind(author.birth_year)
    .bind(author.death_year)
    .fetch_one(executor)
    .await
}

/// Insert a new book and return the stored record with its assigned ID.
///
/// Fails with a unique constraint violation if the title is already taken,
/// or a foreign key violation if the author does not exist.
pub async fn save_book<'e>(executor: impl SqliteExecutor<'e>, book: &NewBook) -> sqlx::Result<Book> {
    sqlx::query_as::<_, Book>(&format!(
        r#"
        INSERT INTO books (title, author_id, language, download_count, author_names, catalog_id)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING {BOOK_COLUMNS}
        "#
    ))
    .bind(&book.title)
    .bind(book.author_id)
    .bind(&book.language)
    .bind(book.download_count)
    .bind(&book.author_names)
    .bind(book.catalog_id)
    .fetch_one(executor)
    .await
}

// ============================================================================
// Listing
// ============================================================================

/// Get all books in insertion order, without joins.
pub async fn all_books(pool: &SqlitePool) -> sqlx::Result<Vec<Book>> {
    sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Get all books in insertion order with their author's name.
///
/// This is the primary method for listing books for display.
pub async fn all_books_with_author(pool: &SqlitePool) -> sqlx::Result<Vec<BookWithAuthor>> {
    sqlx::query_as::<_, BookWithAuthor>(&format!("{BOOK_WITH_AUTHOR_SELECT} ORDER BY b.id"))
        .fetch_all(pool)
        .await
}

/// Get books whose stored language code equals `code` exactly.
pub async fn books_by_language(pool: &SqlitePool, code: &str) -> sqlx::Result<Vec<BookWithAuthor>> {
    sqlx::query_as::<_, BookWithAuthor>(&format!(
        "{BOOK_WITH_AUTHOR_SELECT} WHERE b.language = ? ORDER BY b.id"
    ))
    .bind(code)
    .fetch_all(pool)
    .await
}

/// Get all authors in insertion order.
pub async fn all_authors(pool: &SqlitePool) -> sqlx::Result<Vec<Author>> {
    sqlx::query_as::<_, Author>("SELECT id, name, birth_year, death_year FROM authors ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Get authors alive at some point during `year`.
///
/// Birth and death bounds are inclusive; a missing death year counts as
/// still alive. Authors with no birth year never match.
pub async fn authors_alive_in(pool: &SqlitePool, year: i64) -> sqlx::Result<Vec<Author>> {
    sqlx::query_as::<_, Author>(
        r#"
        SELECT id, name, birth_year, death_year
        FROM authors
        WHERE birth_year <= ?
          AND (death_year IS NULL OR death_year >= ?)
        ORDER BY id
        "#,
    )
    .bind(year)
    .bind(year)
    .fetch_all(pool)
    .await
}

/// Count rows in the authors and books tables.
pub async fn counts(pool: &SqlitePool) -> sqlx::Result<(i64, i64)> {
    let (authors,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await?;
    let (books,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;
    Ok((authors, books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_author, new_book, temp_db};

    #[tokio::test]
    async fn test_init_db_creates_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_url = db_url(Some(&db_path));

        let pool = init_db(&db_url).await.expect("Failed to init db");
        assert!(db_path.exists());

        let books = all_books(&pool).await.expect("Failed to query books");
        assert!(books.is_empty());
        assert_eq!(counts(&pool).await.unwrap(), (0, 0));
    }

    #[test]
    fn test_db_url_default() {
        assert_eq!(db_url(None), "sqlite:book_minder.db");
    }

    #[tokio::test]
    async fn test_author_save_and_find() {
        let (pool, _dir) = temp_db().await;

        let saved = save_author(&pool, &new_author("Jane Doe", Some(1800), Some(1850)))
            .await
            .unwrap();
        assert!(saved.id > 0);
        assert_eq!(saved.birth_year, Some(1800));

        let found = find_author_by_name(&pool, "Jane Doe").await.unwrap();
        assert_eq!(found, Some(saved));

        // Exact match only
        assert!(find_author_by_name(&pool, "jane doe").await.unwrap().is_none());
        assert!(find_author_by_name(&pool, "Jane").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_author_name_rejected() {
        let (pool, _dir) = temp_db().await;

        save_author(&pool, &new_author("Jane Doe", None, None))
            .await
            .unwrap();
        let dup = save_author(&pool, &new_author("Jane Doe", Some(1900), None)).await;
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn test_book_save_and_find() {
        let (pool, _dir) = temp_db().await;
        let author = save_author(&pool, &new_author("Frank Herbert", Some(1920), Some(1986)))
            .await
            .unwrap();

        let book = save_book(&pool, &new_book("Dune", author.id, "en"))
            .await
            .unwrap();
        assert_eq!(book.author_id, author.id);

        let found = find_book_by_title(&pool, "Dune").await.unwrap();
        assert_eq!(found, Some(book));
        assert!(find_book_by_title(&pool, "dune").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected() {
        let (pool, _dir) = temp_db().await;
        let author = save_author(&pool, &new_author("A", None, None)).await.unwrap();

        save_book(&pool, &new_book("Same", author.id, "en")).await.unwrap();
        assert!(save_book(&pool, &new_book("Same", author.id, "fr")).await.is_err());
    }

    #[tokio::test]
    async fn test_book_requires_existing_author() {
        let (pool, _dir) = temp_db().await;
        let orphan = save_book(&pool, &new_book("Orphan", 999, "en")).await;
        assert!(orphan.is_err());
    }

    #[tokio::test]
    async fn test_listing_in_insertion_order() {
        let (pool, _dir) = temp_db().await;
        let zed = save_author(&pool, &new_author("Zed", None, None)).await.unwrap();
        let amy = save_author(&pool, &new_author("Amy", None, None)).await.unwrap();

        save_book(&pool, &new_book("Zebra", zed.id, "en")).await.unwrap();
        save_book(&pool, &new_book("Apple", amy.id, "es")).await.unwrap();
        save_book(&pool, &new_book("Mango", zed.id, "en")).await.unwrap();

        let names: Vec<_> = all_authors(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy"]);

        let books = all_books_with_author(&pool).await.unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Zebra", "Apple", "Mango"]);
        assert_eq!(books[1].author_name, "Amy");

    }

    #[tokio::test]
    async fn test_authors_alive_in_sql_matches_boundaries() {
        let (pool, _dir) = temp_db().await;
        save_author(&pool, &new_author("Jane Doe", Some(1800), Some(1850)))
            .await
            .unwrap();
        save_author(&pool, &new_author("Still Here", Some(1900), None))
            .await
            .unwrap();
        save_author(&pool, &new_author("Unknown", None, None))
            .await
            .unwrap();

        let alive = |year| {
            let pool = pool.clone();
            async move {
                authors_alive_in(&pool, year)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|a| a.name)
                    .collect::<Vec<_>>()
            }
        };

        assert_eq!(alive(1799).await, Vec::<String>::new());
        assert_eq!(alive(1800).await, vec!["Jane Doe"]);
        assert_eq!(alive(1825).await, vec!["Jane Doe"]);
        assert_eq!(alive(1850).await, vec!["Jane Doe"]);
        assert_eq!(alive(1851).await, Vec::<String>::new());
        assert_eq!(alive(2100).await, vec!["Still Here"]);
    }

    #[tokio::test]
    async fn test_books_by_language_exact() {
        let (pool, _dir) = temp_db().await;
        let author = save_author(&pool, &new_author("A", None, None)).await.unwrap();
        save_book(&pool, &new_book("One", author.id, "en")).await.unwrap();
        save_book(&pool, &new_book("Two", author.id, "EN")).await.unwrap();
        save_book(&pool, &new_book("Three", author.id, "eng")).await.unwrap();

        let en = books_by_language(&pool, "en").await.unwrap();
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].title, "One");
        assert!(books_by_language(&pool, "e").await.unwrap().is_empty());
    }
}
