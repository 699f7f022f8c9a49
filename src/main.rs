//! Book Minder - search the Project Gutenberg catalog and keep a local shelf.
//!
//! Search results are registered into a local SQLite database without
//! duplicating books or authors, and the shelf can be listed by author,
//! language, or the years an author was alive. Runs as a set of CLI
//! subcommands or, with no subcommand, as an interactive menu.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod model;
pub mod query;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so listings on stdout stay clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("book_minder=info".parse()?))
        .init();

    cli::run_command(&args)
}
