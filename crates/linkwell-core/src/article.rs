//! The article record shared between the store and the frontends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A stored note, keyed by normalized URL.
///
/// `links` is the set of outbound link targets parsed from `content`.
/// `backlinks` is derived by the store (URLs of articles whose links contain
/// this URL) and is never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub content: String,
    pub links: BTreeSet<String>,
    pub backlinks: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl Article {
    /// Build an article with no backlinks, deriving the link set from the
    /// content.
    pub fn new(
        url: impl Into<String>,
        content: impl Into<String>,
        tags: BTreeSet<String>,
    ) -> Self {
        let url = crate::url::normalize_url(&url.into());
        let content = content.into();
        let links = crate::links::extract_links(&content);
        Self {
            url,
            content,
            links,
            backlinks: BTreeSet::new(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_links() {
        let article = Article::new(
            "http://example.com/note/",
            "See [[http://example.com/other]] for details",
            BTreeSet::from(["reference".to_string()]),
        );

        assert_eq!(article.url, "http://example.com/note");
        assert!(article.links.contains("http://example.com/other"));
        assert!(article.backlinks.is_empty());
    }

    #[test]
    fn test_value_equality() {
        let a = Article::new("http://a.com", "text", BTreeSet::new());
        let b = Article::new("http://a.com/", "text", BTreeSet::new());
        assert_eq!(a, b);
    }
}
