//! Query expression trees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed query expression.
///
/// Trees are immutable values compared structurally, which is what the
/// parser tests rely on. The five leaf variants are the only predicate kinds
/// the language has; the renderer matches on them exhaustively, so an
/// unhandled node kind is a compile error rather than a runtime surprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// Articles carrying the given tag.
    Tag(String),
    /// Articles whose URL authority equals the given domain.
    Domain(String),
    /// Articles that link *to* the given URL.
    Links(String),
    /// Articles that the given URL links to ("linked by").
    LinkedBy(String),
    /// The article with exactly this URL.
    Url(String),
    /// Both operands match.
    And(Box<Query>, Box<Query>),
    /// Either operand matches.
    Or(Box<Query>, Box<Query>),
    /// The operand does not match.
    Not(Box<Query>),
}

impl Query {
    pub fn and(lhs: Query, rhs: Query) -> Self {
        Query::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Query, rhs: Query) -> Self {
        Query::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn not(expr: Query) -> Self {
        Query::Not(Box::new(expr))
    }
}

/// Canonical diagnostic form: `AND[x, y]`, `OR[x, y]`, `NOT[x]`, and
/// `prefix:value` for the leaves.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Tag(tag) => write!(f, "tag:{}", tag),
            Query::Domain(domain) => write!(f, "domain:{}", domain),
            Query::Links(url) => write!(f, "links:{}", url),
            Query::LinkedBy(url) => write!(f, "linked:{}", url),
            Query::Url(url) => write!(f, "url:{}", url),
            Query::And(lhs, rhs) => write!(f, "AND[{}, {}]", lhs, rhs),
            Query::Or(lhs, rhs) => write!(f, "OR[{}, {}]", lhs, rhs),
            Query::Not(expr) => write!(f, "NOT[{}]", expr),
        }
    }
}
