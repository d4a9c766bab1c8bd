//! Error types for expression parsing and building

use crate::expression::operand::{OperandKind, Operator};
use thiserror::Error;

/// How a string failed the parenthesis balance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Imbalance {
    /// A `)` closed a group that was never opened
    #[error("unmatched ')' at byte {position}")]
    UnmatchedClose { position: usize },
    /// The text ended with groups still open
    #[error("{depth} unclosed '('")]
    Unclosed { depth: usize },
}

/// Errors that abort a simplify, split or build call
///
/// Errors propagate unchanged from the point where they are raised up to the caller of the
/// top-level operation; nothing is wrapped on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// Parenthesis nesting is not well formed
    #[error("unbalanced parentheses: {0}")]
    Parentheses(#[from] Imbalance),

    /// The builder needed a combinator the caller did not register
    #[error("{}", missing_combinator_message(.operator, .left, .right))]
    MissingCombinator {
        operator: Operator,
        left: OperandKind,
        /// `None` for the unary `not`
        right: Option<OperandKind>,
    },
}

fn missing_combinator_message(
    operator: &Operator,
    left: &OperandKind,
    right: &Option<OperandKind>,
) -> String {
    match right {
        Some(right) => format!("no {operator} combinator registered for ({left}, {right})"),
        None => format!("no {operator} combinator registered for ({left})"),
    }
}

/// Result alias used throughout the expression module
pub type Result<T, E = ExpressionError> = std::result::Result<T, E>;
