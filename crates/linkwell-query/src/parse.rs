//! The query parser.
//!
//! Parsing runs in three passes:
//!
//! 1. Parentheses are padded with whitespace and the query is split into a
//!    flat word list, so users never have to space out their parens.
//! 2. A grouping pass nests the word list according to parentheses,
//!    maintaining a stack of in-progress token lists.
//! 3. Each (possibly nested) token list is folded into a [`Query`] tree with
//!    an operator/operand stack, consuming tokens from the end of the list
//!    backward.
//!
//! The backward traversal gives compound trees their operands in reverse
//! reading order (`"a AND b"` parses to `And(Tag("b"), Tag("a"))`). That
//! shape is asserted by long-standing tests and kept as a contract; do not
//! "fix" it by switching to a left-to-right fold.

use crate::ast::Query;
use crate::error::ParseError;

/// A token after the grouping pass: a bare word, or a parenthesized group.
#[derive(Debug)]
enum Token {
    Word(String),
    Group(Vec<Token>),
}

/// Stack operators, separated from [`Query`] so unapplied operators carry no
/// operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Not,
}

impl Op {
    fn is_binary(self) -> bool {
        matches!(self, Op::And | Op::Or)
    }

    fn is_unary(self) -> bool {
        matches!(self, Op::Not)
    }
}

/// Leaf prefixes, checked in this order. Unprefixed words fall through to
/// `Tag`.
const LEAF_PREFIXES: [(&str, fn(String) -> Query); 5] = [
    ("domain:", Query::Domain),
    ("tag:", Query::Tag),
    ("links:", Query::Links),
    ("linked:", Query::LinkedBy),
    ("url:", Query::Url),
];

/// Parse a query string into a [`Query`] tree.
///
/// Pure and deterministic: the same input always yields a structurally
/// identical tree, and the only failure mode is [`ParseError`].
pub fn parse(raw: &str) -> Result<Query, ParseError> {
    let expanded = raw.replace('(', " ( ").replace(')', " ) ");

    let mut tokens: Vec<Token> = Vec::new();
    let mut paren_stack: Vec<Vec<Token>> = Vec::new();

    for word in expanded.split_whitespace() {
        match word {
            "(" => paren_stack.push(std::mem::take(&mut tokens)),
            ")" => {
                let closed = tokens;
                tokens = paren_stack.pop().ok_or(ParseError::UnbalancedParens)?;
                tokens.push(Token::Group(closed));
            }
            _ => tokens.push(Token::Word(word.to_string())),
        }
    }

    // Leftover outer layers mean an unmatched '('.
    if !paren_stack.is_empty() {
        return Err(ParseError::UnbalancedParens);
    }

    fold_group(tokens)
}

/// Convert a single word into a leaf node.
fn word_to_query(word: &str) -> Query {
    for (prefix, constructor) in LEAF_PREFIXES {
        if let Some(value) = word.strip_prefix(prefix) {
            return constructor(value.to_string());
        }
    }

    // Everything which isn't a prefixed query form is a tag.
    Query::Tag(word.to_string())
}

/// Fold a token list into a tree, consuming tokens back to front.
fn fold_group(mut tokens: Vec<Token>) -> Result<Query, ParseError> {
    let mut operands: Vec<Query> = Vec::new();
    let mut operators: Vec<Op> = Vec::new();

    while let Some(token) = tokens.pop() {
        match token {
            Token::Group(inner) => operands.push(fold_group(inner)?),
            Token::Word(word) => match word.as_str() {
                "AND" => operators.push(Op::And),
                "OR" => operators.push(Op::Or),
                "NOT" => operators.push(Op::Not),
                _ => operands.push(word_to_query(&word)),
            },
        }
    }

    fold_operators(operators, operands)
}

/// Apply the top unary operator to the top operand.
fn apply_unary(operators: &mut Vec<Op>, operands: &mut Vec<Query>) -> Result<(), ParseError> {
    let operator = operators.pop().ok_or(ParseError::MissingOperand)?;
    debug_assert!(operator.is_unary());
    let expr = operands.pop().ok_or(ParseError::MissingOperand)?;
    operands.push(Query::not(expr));
    Ok(())
}

/// Reduce the operator/operand stacks to a single tree.
fn fold_operators(mut operators: Vec<Op>, mut operands: Vec<Query>) -> Result<Query, ParseError> {
    while let Some(&last) = operators.last() {
        let next_to_last = operators
            .len()
            .checked_sub(2)
            .map(|index| operators[index]);

        if last.is_binary() && operands.len() >= 2 {
            // Precedence repair: a unary operator beneath a pending binary
            // one must bind tighter, so NOT a OR b becomes (NOT a) OR b
            // rather than NOT (a OR b). Set the binary operator and its
            // already-consumed operand aside, apply the NOT, then restore.
            if next_to_last.is_some_and(Op::is_unary) {
                let saved_operator = operators.pop().ok_or(ParseError::MissingOperand)?;
                let saved_operand = operands.pop().ok_or(ParseError::MissingOperand)?;

                apply_unary(&mut operators, &mut operands)?;

                operators.push(saved_operator);
                operands.push(saved_operand);
            } else {
                let operator = operators.pop().ok_or(ParseError::MissingOperand)?;
                let second = operands.pop().ok_or(ParseError::MissingOperand)?;
                let first = operands.pop().ok_or(ParseError::MissingOperand)?;
                operands.push(match operator {
                    Op::And => Query::and(first, second),
                    Op::Or => Query::or(first, second),
                    Op::Not => unreachable!("binary fold on unary operator"),
                });
            }
        } else if last.is_unary() && !operands.is_empty() {
            apply_unary(&mut operators, &mut operands)?;
        } else {
            return Err(ParseError::MissingOperand);
        }
    }

    // Bare juxtaposition is an implicit AND, folded right to left.
    while operands.len() > 1 {
        let second = operands.pop().ok_or(ParseError::MissingOperand)?;
        let first = operands.pop().ok_or(ParseError::MissingOperand)?;
        operands.push(Query::and(second, first));
    }

    operands.pop().ok_or(ParseError::EmptyQuery)
}
