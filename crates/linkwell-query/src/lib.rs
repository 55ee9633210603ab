//! Boolean query language for linkwell.
//!
//! Queries select articles by tag, domain, outbound link, backlink, or exact
//! URL, combined with `AND`, `OR`, `NOT`, and parentheses:
//!
//! ```text
//! domain:1.com AND NOT (tag:draft OR links:http://1.com/a)
//! ```
//!
//! A bare word is shorthand for `tag:word`, and juxtaposition is an implicit
//! `AND`. [`parse`] builds a [`Query`] tree; the [`render`] module turns the
//! tree into a parameterized SQL predicate for the article store.

pub mod ast;
pub mod error;
pub mod parse;
pub mod render;

pub use ast::Query;
pub use error::ParseError;
pub use parse::parse;
pub use render::{RenderedPredicate, SqliteRenderer};
