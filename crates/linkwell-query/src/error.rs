//! Query parsing errors.

use thiserror::Error;

/// Errors produced while parsing a query string.
///
/// Parsing is all-or-nothing: a malformed query is never partially
/// recovered, and nothing in the parse path performs I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unmatched `(` or `)` in the query.
    #[error("parentheses nesting error")]
    UnbalancedParens,

    /// A binary or unary operator without its required operands.
    #[error("not enough operands for operator")]
    MissingOperand,

    /// The query contained no terms at all.
    #[error("empty query")]
    EmptyQuery,
}
