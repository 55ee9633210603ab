//! The article store.
//!
//! Owns all persisted state: the article rows (compressed content plus a
//! precomputed domain column) and the link/tag multimap tables. The query
//! subsystem only reads through [`ArticleStore::search`]; everything else
//! here is the create/read/update/delete lifecycle.

use crate::connection::SqlitePool;
use crate::error::{SqliteError, SqliteResult};
use linkwell_core::{normalize_url, url_domain, Article};
use linkwell_query::{Query, SqliteRenderer};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::BTreeSet;
use std::io::{Read, Write};
use tracing::debug;

/// Compression level for stored article content, matching zlib's default
/// range midpoint used since the first schema version.
const COMPRESS_LEVEL: u32 = 6;

/// Durable keyed storage for articles, links, and tags.
///
/// Constructed over an explicit [`SqlitePool`] so tests get isolated
/// in-memory instances; there is no ambient global handle.
#[derive(Clone)]
pub struct ArticleStore {
    pool: SqlitePool,
    renderer: SqliteRenderer,
}

impl ArticleStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            renderer: SqliteRenderer::default(),
        }
    }

    /// Insert a new article.
    ///
    /// Fails with [`SqliteError::AlreadyExists`] if the normalized URL is
    /// already present. The article row and its link/tag rows commit as one
    /// transaction.
    pub fn create(
        &self,
        url: &str,
        content: &str,
        links: &BTreeSet<String>,
        tags: &BTreeSet<String>,
    ) -> SqliteResult<()> {
        let url = normalize_url(url);
        let blob = compress_content(content);
        let domain = url_domain(&url);

        self.pool.with_connection_mut(|conn| {
            let tx = conn.transaction()?;

            if count_by_url(&tx, &url)? > 0 {
                return Err(SqliteError::AlreadyExists(url.clone()));
            }

            tx.execute(
                "INSERT INTO articles (url, article, domain) VALUES (?, ?, ?)",
                params![url, blob, domain],
            )?;

            for link in links {
                tx.execute("INSERT INTO links (url, linked) VALUES (?, ?)", params![url, link])?;
            }
            for tag in tags {
                tx.execute("INSERT INTO tags (url, tag) VALUES (?, ?)", params![url, tag])?;
            }

            tx.commit()?;
            debug!(%url, "Created article");
            Ok(())
        })
    }

    /// Replace an existing article's content and resync its link/tag rows.
    ///
    /// Fails with [`SqliteError::NotFound`] if the URL is absent. Content is
    /// replaced wholesale; the link and tag multimaps are reconciled with a
    /// minimal diff rather than rewritten.
    pub fn update(
        &self,
        url: &str,
        content: &str,
        links: &BTreeSet<String>,
        tags: &BTreeSet<String>,
    ) -> SqliteResult<()> {
        let url = normalize_url(url);
        let blob = compress_content(content);

        self.pool.with_connection_mut(|conn| {
            let tx = conn.transaction()?;

            if count_by_url(&tx, &url)? != 1 {
                return Err(SqliteError::NotFound(url.clone()));
            }

            tx.execute(
                "UPDATE articles SET article = ? WHERE url = ?",
                params![blob, url],
            )?;

            sync_multimap(&tx, &url, "tags", "tag", tags)?;
            sync_multimap(&tx, &url, "links", "linked", links)?;

            tx.commit()?;
            debug!(%url, "Updated article");
            Ok(())
        })
    }

    /// Remove an article along with its tag and link rows.
    ///
    /// Idempotent: deleting an absent URL succeeds and changes nothing.
    pub fn delete(&self, url: &str) -> SqliteResult<()> {
        let url = normalize_url(url);

        self.pool.with_connection_mut(|conn| {
            let tx = conn.transaction()?;

            tx.execute("DELETE FROM articles WHERE url = ?", params![url])?;
            tx.execute("DELETE FROM tags WHERE url = ?", params![url])?;
            tx.execute("DELETE FROM links WHERE url = ?", params![url])?;

            tx.commit()?;
            debug!(%url, "Deleted article");
            Ok(())
        })
    }

    /// Assemble the full article record: content, tags, links, and derived
    /// backlinks.
    pub fn get(&self, url: &str) -> SqliteResult<Article> {
        let url = normalize_url(url);

        self.pool.with_connection(|conn| {
            let blob: Option<Vec<u8>> = conn
                .query_row(
                    "SELECT article FROM articles WHERE url = ?",
                    params![url],
                    |row| row.get(0),
                )
                .optional()?;

            let blob = blob.ok_or_else(|| SqliteError::NotFound(url.clone()))?;
            let content = decompress_content(&url, &blob)?;

            let tags = collect_column(conn, "SELECT tag FROM tags WHERE url = ?", &url)?;
            let links = collect_column(conn, "SELECT linked FROM links WHERE url = ?", &url)?;
            let backlinks =
                collect_column(conn, "SELECT url FROM links WHERE linked = ?", &url)?;

            Ok(Article {
                url,
                content,
                links,
                backlinks,
                tags,
            })
        })
    }

    /// How many articles are stored under the URL (0 or 1).
    pub fn count_by_url(&self, url: &str) -> SqliteResult<u64> {
        let url = normalize_url(url);
        self.pool.with_connection(|conn| count_by_url(conn, &url))
    }

    /// Tags of the given article. Empty set if the article is absent.
    pub fn get_tags(&self, url: &str) -> SqliteResult<BTreeSet<String>> {
        let url = normalize_url(url);
        self.pool
            .with_connection(|conn| collect_column(conn, "SELECT tag FROM tags WHERE url = ?", &url))
    }

    /// Outbound links of the given article.
    pub fn get_links(&self, url: &str) -> SqliteResult<BTreeSet<String>> {
        let url = normalize_url(url);
        self.pool.with_connection(|conn| {
            collect_column(conn, "SELECT linked FROM links WHERE url = ?", &url)
        })
    }

    /// URLs of articles whose links point at the given URL.
    pub fn get_backlinks(&self, url: &str) -> SqliteResult<BTreeSet<String>> {
        let url = normalize_url(url);
        self.pool.with_connection(|conn| {
            collect_column(conn, "SELECT url FROM links WHERE linked = ?", &url)
        })
    }

    /// Evaluate a query tree, returning the set of matching article URLs.
    pub fn search(&self, query: &Query) -> SqliteResult<BTreeSet<String>> {
        let rendered = self.renderer.render(query);
        debug!(sql = %rendered.sql, "Evaluating query predicate");

        self.pool.with_connection(|conn| {
            let sql = format!(
                "SELECT articles.url FROM articles WHERE {}",
                rendered.sql
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(rendered.params.iter()), |row| {
                row.get::<_, String>(0)
            })?;

            let mut urls = BTreeSet::new();
            for row in rows {
                urls.insert(row?);
            }
            Ok(urls)
        })
    }
}

/// Reconcile a one-to-many table with a new value set using a minimal diff.
///
/// Computes `to_add = new − existing` and `to_remove = existing − new` and
/// applies only those insertions/deletions, leaving unrelated rows untouched.
/// Runs inside the caller's transaction. `table` and `column` are internal
/// constants, never user input.
fn sync_multimap(
    conn: &Connection,
    url: &str,
    table: &str,
    column: &str,
    values: &BTreeSet<String>,
) -> SqliteResult<()> {
    let existing = collect_column(
        conn,
        &format!("SELECT {} FROM {} WHERE url = ?", column, table),
        url,
    )?;

    for value in values.difference(&existing) {
        conn.execute(
            &format!("INSERT INTO {} (url, {}) VALUES (?, ?)", table, column),
            params![url, value],
        )?;
    }

    for value in existing.difference(values) {
        conn.execute(
            &format!("DELETE FROM {} WHERE url = ? AND {} = ?", table, column),
            params![url, value],
        )?;
    }

    Ok(())
}

fn count_by_url(conn: &Connection, url: &str) -> SqliteResult<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(url) FROM articles WHERE url = ?",
        params![url],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// Run a single-column, single-parameter query and collect the results.
fn collect_column(conn: &Connection, sql: &str, param: &str) -> SqliteResult<BTreeSet<String>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![param], |row| row.get::<_, String>(0))?;

    let mut values = BTreeSet::new();
    for row in rows {
        values.insert(row?);
    }
    Ok(values)
}

fn compress_content(content: &str) -> Vec<u8> {
    let mut encoder = flate2::write::ZlibEncoder::new(
        Vec::new(),
        flate2::Compression::new(COMPRESS_LEVEL),
    );
    // Writing to a Vec cannot fail.
    encoder
        .write_all(content.as_bytes())
        .and_then(|_| encoder.finish())
        .expect("zlib compression to memory")
}

fn decompress_content(url: &str, blob: &[u8]) -> SqliteResult<String> {
    let mut decoder = flate2::read::ZlibDecoder::new(blob);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .map_err(|e| SqliteError::CorruptContent {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    Ok(content)
}
