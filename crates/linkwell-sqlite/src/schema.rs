//! Schema management and migrations.

use crate::error::{SqliteError, SqliteResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Schema version - increment when making schema changes
const SCHEMA_VERSION: i32 = 1;

/// Apply all pending migrations.
pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = get_current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking migrations");

    if current_version < SCHEMA_VERSION {
        info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Applying schema migrations"
        );
        apply_migration_v1(conn)?;
    }

    Ok(())
}

fn get_current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })
        .unwrap_or(None);

    Ok(version.unwrap_or(0))
}

fn record_migration(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO schema_migrations (version) VALUES (?)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: article, link, and tag relations.
fn apply_migration_v1(conn: &Connection) -> SqliteResult<()> {
    debug!("Applying migration v1: article/link/tag relations");

    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;

    record_migration(conn, 1)?;
    Ok(())
}

/// Initial schema SQL.
///
/// `articles.article` holds zlib-compressed UTF-8 content; `articles.domain`
/// is precomputed at write time from the URL authority so domain queries
/// never parse URLs. The link and tag tables are one-to-many multimaps keyed
/// by article URL, with pair primary keys so duplicate rows are impossible.
const SCHEMA_V1: &str = r#"
-- ============================================================================
-- TABLE: articles
-- ============================================================================

CREATE TABLE IF NOT EXISTS articles (
    url TEXT PRIMARY KEY NOT NULL,
    article BLOB NOT NULL,
    domain TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_articles_domain ON articles(domain);

-- ============================================================================
-- TABLE: links
-- ============================================================================
-- Outbound links: url links to linked

CREATE TABLE IF NOT EXISTS links (
    url TEXT NOT NULL,
    linked TEXT NOT NULL,
    PRIMARY KEY (url, linked)
);

CREATE INDEX IF NOT EXISTS idx_links_linked ON links(linked);

-- ============================================================================
-- TABLE: tags
-- ============================================================================

CREATE TABLE IF NOT EXISTS tags (
    url TEXT NOT NULL,
    tag TEXT NOT NULL,
    PRIMARY KEY (url, tag)
);

CREATE INDEX IF NOT EXISTS idx_tags_tag ON tags(tag);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_applies_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        apply_migrations(&conn).unwrap();
        apply_migrations(&conn).unwrap();

        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_pair_primary_keys_reject_duplicates() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        conn.execute("INSERT INTO tags VALUES ('u', 't')", []).unwrap();
        let dup = conn.execute("INSERT INTO tags VALUES ('u', 't')", []);
        assert!(dup.is_err());
    }
}
