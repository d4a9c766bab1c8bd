//! # filterex
//!
//! Turns a textual boolean filter expression such as
//!
//!     (alice or bob) and not carol
//!
//! into a composite predicate value built by caller-supplied combinators. The parser never looks
//! inside the values it passes around: it only knows whether an operand is still a bare term
//! ([Operand::Leaf]) or something a combinator already produced ([Operand::Built]).
//!
//! Precedence is fixed: `or` binds loosest, then `and`, then `not`. Parentheses group.
//!
//! The main entry points are [ExpressionBuilder] for building and [is_valid] for standalone
//! grammar checks. The splitting primitives are public too, see [expression::splitting].

pub mod expression;

pub use expression::builder::ExpressionBuilder;
pub use expression::combinators::Combinators;
pub use expression::error::{ExpressionError, Imbalance, Result};
pub use expression::operand::{Operand, OperandKind, Operator};
pub use expression::validate::is_valid;
