//! SQLite predicate renderer.
//!
//! Renders a query tree to a boolean expression over the article relations:
//!
//! ```sql
//! CREATE TABLE articles (url TEXT PRIMARY KEY, article BLOB, domain TEXT);
//! CREATE TABLE links (url TEXT, linked TEXT, PRIMARY KEY (url, linked));
//! CREATE TABLE tags (url TEXT, tag TEXT, PRIMARY KEY (url, tag));
//! ```
//!
//! Tag, links, and linked predicates become correlated `EXISTS` subqueries
//! against the multimap tables; domain and url compare columns on the
//! article row itself. Every user-supplied value is bound as a positional
//! parameter.

use crate::ast::Query;
use crate::render::RenderedPredicate;

/// SQLite renderer with configurable table names.
#[derive(Clone)]
pub struct SqliteRenderer {
    pub articles_table: String,
    pub links_table: String,
    pub tags_table: String,
}

impl Default for SqliteRenderer {
    fn default() -> Self {
        Self {
            articles_table: "articles".to_string(),
            links_table: "links".to_string(),
            tags_table: "tags".to_string(),
        }
    }
}

impl SqliteRenderer {
    /// Create a renderer with custom table names.
    pub fn with_tables(
        articles: impl Into<String>,
        links: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            articles_table: articles.into(),
            links_table: links.into(),
            tags_table: tags.into(),
        }
    }

    /// Render the query to a predicate fragment plus its bound parameters.
    ///
    /// Infallible: the match over [`Query`] is exhaustive, so every tree the
    /// parser can produce has a translation.
    pub fn render(&self, query: &Query) -> RenderedPredicate {
        let mut params = Vec::new();
        let sql = self.render_node(query, &mut params);
        RenderedPredicate { sql, params }
    }

    fn render_node(&self, query: &Query, params: &mut Vec<String>) -> String {
        match query {
            Query::Tag(tag) => {
                params.push(tag.clone());
                format!(
                    "EXISTS (SELECT 1 FROM {tags} WHERE tag = ? AND url = {articles}.url)",
                    tags = self.tags_table,
                    articles = self.articles_table,
                )
            }
            Query::Domain(domain) => {
                params.push(domain.clone());
                format!("{}.domain = ?", self.articles_table)
            }
            Query::Links(url) => {
                params.push(url.clone());
                format!(
                    "EXISTS (SELECT 1 FROM {links} WHERE linked = ? AND url = {articles}.url)",
                    links = self.links_table,
                    articles = self.articles_table,
                )
            }
            Query::LinkedBy(url) => {
                params.push(url.clone());
                format!(
                    "EXISTS (SELECT 1 FROM {links} WHERE url = ? AND linked = {articles}.url)",
                    links = self.links_table,
                    articles = self.articles_table,
                )
            }
            Query::Url(url) => {
                params.push(url.clone());
                format!("{}.url = ?", self.articles_table)
            }
            Query::And(lhs, rhs) => {
                let left = self.render_node(lhs, params);
                let right = self.render_node(rhs, params);
                format!("({}) AND ({})", left, right)
            }
            Query::Or(lhs, rhs) => {
                let left = self.render_node(lhs, params);
                let right = self.render_node(rhs, params);
                format!("({}) OR ({})", left, right)
            }
            Query::Not(expr) => {
                let inner = self.render_node(expr, params);
                format!("NOT ({})", inner)
            }
        }
    }
}
