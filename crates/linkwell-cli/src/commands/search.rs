use anyhow::{Context, Result};
use linkwell_sqlite::ArticleStore;

/// Parse and evaluate a query, printing matching URLs one per line.
pub fn search(store: &ArticleStore, raw: &str) -> Result<()> {
    let query = linkwell_query::parse(raw)
        .with_context(|| format!("invalid query string {:?}", raw))?;
    tracing::debug!(tree = %query, "Parsed query");

    let urls = store.search(&query)?;
    for url in urls {
        println!("{}", url);
    }

    Ok(())
}
