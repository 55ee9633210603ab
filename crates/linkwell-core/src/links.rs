//! Link extraction from article text.
//!
//! Articles mark outbound links with double brackets: `[[http://a.com/b]]`.
//! The markers are non-greedy, cannot nest, and must be non-empty (`[[]]` is
//! plain text). Two views are exposed:
//!
//! - [`extract_links`]: the set of normalized link targets, used when
//!   writing an article's link rows
//! - [`link_chunks`]: an ordered text/link alternation covering the whole
//!   input, used when rendering an article

use crate::url::normalize_url;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("link regex"));

/// One span of article text, either literal text or a link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Text(String),
    Link(String),
}

/// Parse the set of outbound links from a piece of text.
///
/// Targets are normalized, and duplicates collapse.
pub fn extract_links(text: &str) -> BTreeSet<String> {
    LINK_REGEX
        .captures_iter(text)
        .map(|cap| normalize_url(&cap[1]))
        .collect()
}

/// Split text into an ordered sequence of [`Chunk`]s.
///
/// Non-link text is preserved verbatim (whitespace included); the chunks
/// cover the entire input with no gaps or overlaps. Link chunks hold the
/// normalized target.
pub fn link_chunks(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut rest = 0;

    for cap in LINK_REGEX.captures_iter(text) {
        let whole = cap.get(0).expect("match");
        chunks.push(Chunk::Text(text[rest..whole.start()].to_string()));
        chunks.push(Chunk::Link(normalize_url(&cap[1])));
        rest = whole.end();
    }

    if rest < text.len() {
        chunks.push(Chunk::Text(text[rest..].to_string()));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "This is a link to [[a]] and [[b]] but not [[]]";

    // =========================================================================
    // Link set extraction
    // =========================================================================

    #[test]
    fn test_extract_links() {
        let links = extract_links(SAMPLE);
        assert_eq!(
            links,
            BTreeSet::from(["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_extract_links_normalizes() {
        let links = extract_links("[[http://a.com/x/]]");
        assert_eq!(links, BTreeSet::from(["http://a.com/x".to_string()]));
    }

    #[test]
    fn test_extract_links_duplicates_collapse() {
        let links = extract_links("[[a]] then [[a]] again");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_extract_links_none() {
        assert!(extract_links("no links here, not even [[]]").is_empty());
    }

    // =========================================================================
    // Chunking
    // =========================================================================

    #[test]
    fn test_chunks_alternate() {
        let chunks = link_chunks(SAMPLE);
        assert_eq!(
            chunks,
            vec![
                Chunk::Text("This is a link to ".to_string()),
                Chunk::Link("a".to_string()),
                Chunk::Text(" and ".to_string()),
                Chunk::Link("b".to_string()),
                Chunk::Text(" but not [[]]".to_string()),
            ]
        );
    }

    #[test]
    fn test_chunks_cover_input() {
        let rendered: String = link_chunks(SAMPLE)
            .into_iter()
            .map(|chunk| match chunk {
                Chunk::Text(text) => text,
                Chunk::Link(url) => format!("[[{}]]", url),
            })
            .collect();
        assert_eq!(rendered, SAMPLE);
    }

    #[test]
    fn test_chunks_plain_text() {
        let chunks = link_chunks("nothing to see");
        assert_eq!(chunks, vec![Chunk::Text("nothing to see".to_string())]);
    }

    #[test]
    fn test_chunks_empty_input() {
        assert!(link_chunks("").is_empty());
    }

    #[test]
    fn test_chunks_link_at_end() {
        let chunks = link_chunks("see [[a]]");
        assert_eq!(
            chunks,
            vec![
                Chunk::Text("see ".to_string()),
                Chunk::Link("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_chunks_restartable() {
        assert_eq!(link_chunks(SAMPLE), link_chunks(SAMPLE));
    }
}
