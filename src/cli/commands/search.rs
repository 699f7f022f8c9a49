//! Catalog search command.

use std::io::Write;

use super::Session;
use crate::cli::present;
use crate::error::Error;
use crate::ingest;

/// Search the catalog for `title` and register the top result
pub async fn cmd_search<W: Write>(session: &Session, title: &str, out: &mut W) -> anyhow::Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::invalid_input("search text is empty").into());
    }

    let outcome = ingest::search_and_ingest(session.catalog.as_ref(), &session.pool, title).await?;
    writeln!(out, "{}", present::describe_outcome(&outcome))?;
    Ok(())
}
