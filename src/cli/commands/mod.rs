//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: Catalog search + ingestion
//! - `list`: Listing queries over the local store
//! - `menu`: Interactive numbered menu (runs when no subcommand is given)
//! - `config`: Show or initialize the config file
//!
//! Handlers write to any `io::Write` so they can be exercised in tests.

mod config;
mod list;
mod menu;
mod search;

use clap::{Parser, Subcommand};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::catalog::{CatalogApi, GutendexClient};
use crate::config::Config;
use crate::db;
use crate::error::ResultExt;

pub use config::cmd_config;
pub use list::{cmd_alive, cmd_authors, cmd_books, cmd_language};
pub use menu::run_menu;
pub use search::cmd_search;

/// Book Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (overrides the config file)
    #[arg(long, global = true, env = "BOOK_MINDER_DB")]
    pub db: Option<PathBuf>,

    /// Catalog API base URL (overrides the config file)
    #[arg(long, global = true, env = "BOOK_MINDER_CATALOG_URL")]
    pub catalog_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog by title and register the top result
    Search {
        /// Title (or part of it) to search for
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// List all registered books
    Books,
    /// List all registered authors with their books
    Authors,
    /// List authors alive in a given year
    Alive {
        /// Year to check (negative for BCE)
        #[arg(allow_hyphen_values = true)]
        year: String,
    },
    /// List registered books in a language (es, en, fr, pt)
    Language {
        /// Two-letter language code
        code: String,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Everything a command needs, passed explicitly.
pub struct Session {
    pub pool: SqlitePool,
    pub catalog: Box<dyn CatalogApi>,
}

impl Session {
    /// Open the database and build the catalog client from `config`.
    pub async fn open(config: &Config) -> anyhow::Result<Self> {
        let url = db::db_url(config.database.path.as_deref());
        let pool = db::init_db(&url)
            .await
            .with_context(format!("opening database {}", url))?;
        let catalog = GutendexClient::new(&config.catalog)?;

        let (authors, books) = db::counts(&pool).await?;
        debug!(db = %url, catalog = catalog.base_url(), authors, books, "Session opened");

        Ok(Self {
            pool,
            catalog: Box::new(catalog),
        })
    }
}

/// Run the command line: a subcommand if one was given, the menu otherwise.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = crate::config::load()
        .with_overrides(cli.db.as_deref(), cli.catalog_url.as_deref());

    let rt = Runtime::new()?;
    rt.block_on(async {
        let mut out = std::io::stdout().lock();

        match &cli.command {
            Some(Commands::Config { init }) => cmd_config(&config, *init, &mut out),
            Some(Commands::Search { title }) => {
                let session = Session::open(&config).await?;
                cmd_search(&session, &title.join(" "), &mut out).await
            }
            Some(Commands::Books) => cmd_books(&Session::open(&config).await?, &mut out).await,
            Some(Commands::Authors) => cmd_authors(&Session::open(&config).await?, &mut out).await,
            Some(Commands::Alive { year }) => {
                cmd_alive(&Session::open(&config).await?, year, &mut out).await
            }
            Some(Commands::Language { code }) => {
                cmd_language(&Session::open(&config).await?, code, &mut out).await
            }
            None => {
                let session = Session::open(&config).await?;
                run_menu(&session, &mut std::io::stdin().lock(), &mut out).await
            }
        }
    })
}
