//! Predicate renderers for query trees.
//!
//! A renderer converts a [`Query`](crate::Query) into a storage-level
//! boolean expression plus the ordered list of values to bind, so the store
//! never splices user input into SQL.

mod sqlite;

pub use sqlite::SqliteRenderer;

/// Output from rendering: a SQL boolean expression over article rows, and
/// the parameters to bind positionally, in translation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPredicate {
    /// The predicate fragment, suitable for a `WHERE` clause.
    pub sql: String,
    /// Values for the `?` placeholders, in order of appearance.
    pub params: Vec<String>,
}
