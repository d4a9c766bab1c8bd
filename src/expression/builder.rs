//! Recursive expression builder
//!
//! The builder tries each precedence level from the loosest inwards:
//!
//!     1. `or`: split on top-level `" or "`; several pieces are built and folded left with the
//!        OR combinators.
//!     2. `and`: the same with `" and "`.
//!     3. `not`: a leading `"not "` negates the rest when the rest is a single term.
//!     4. atom: a parenthesized text is built again from its inside, anything else is a leaf.
//!
//! Every fold step picks its combinator from the kinds of the two operands, so
//! `alice and bob and carol` calls the leaf/leaf AND combinator once and then the built/leaf one.

use crate::expression::combinators::Combinators;
use crate::expression::error::Result;
use crate::expression::operand::{Operand, Operator};
use crate::expression::simplify::simplify;
use crate::expression::classify::is_term;
use crate::expression::splitting::{split_and, split_or, split_parentheses};
use crate::expression::{AND, NOT, OR};

/// Builds filter expressions with a fixed set of combinators.
#[derive(Debug)]
pub struct ExpressionBuilder<T> {
    combinators: Combinators<T>,
}

impl<T> ExpressionBuilder<T> {
    pub fn new(combinators: Combinators<T>) -> Self {
        Self { combinators }
    }

    pub fn combinators(&self) -> &Combinators<T> {
        &self.combinators
    }

    /// Builds `source` into an operand.
    ///
    /// The result is [Operand::Built] holding the value returned by the outermost combinator,
    /// or [Operand::Leaf] when `source` is a single bare term. The first error aborts the whole
    /// build.
    pub fn build(&self, source: &str) -> Result<Operand<T>> {
        let source = simplify(source)?;

        let pieces = split_or(source)?;
        if pieces.len() > 1 {
            return self.fold(Operator::Or, &pieces);
        }

        let pieces = split_and(source)?;
        if pieces.len() > 1 {
            return self.fold(Operator::And, &pieces);
        }

        if let Some(negated) = negated_term(source)? {
            let operand = self.build(negated)?;
            return self.combinators.negate(operand).map(Operand::Built);
        }

        self.build_atom(source)
    }

    /// Builds `source` and turns a bare leaf result into a value with `leaf`.
    pub fn build_value(&self, source: &str, leaf: impl FnOnce(String) -> T) -> Result<T> {
        Ok(self.build(source)?.unwrap_or_else_leaf(leaf))
    }

    fn build_atom(&self, source: &str) -> Result<Operand<T>> {
        // Still wrapped after simplification means the inner text is unbalanced; building it
        // reports the imbalance
        match source.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => self.build(inner),
            None => Ok(Operand::Leaf(source.to_string())),
        }
    }

    fn fold(&self, operator: Operator, pieces: &[String]) -> Result<Operand<T>> {
        let operands = pieces
            .iter()
            .map(|piece| self.build(piece))
            .collect::<Result<Vec<_>>>()?;

        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            unreachable!("fold is only called with several pieces");
        };
        operands.try_fold(first, |acc, next| {
            self.combinators
                .combine(operator, acc, next)
                .map(Operand::Built)
        })
    }
}

/// The operand of a `not ` prefix, when that operand is a single term.
///
/// A single term is one top-level fragment that is either a parenthesized group or plain text
/// without `and`/`or`, whole or halved. Anything else is not a negation and builds as an atom.
fn negated_term(source: &str) -> Result<Option<&str>> {
    let Some(rest) = source.strip_prefix(NOT) else {
        return Ok(None);
    };
    let rest = rest.trim_matches(' ');
    let single = match split_parentheses(rest)?.as_slice() {
        [fragment] => is_term(rest) || !carries_operator(fragment),
        _ => false,
    };
    Ok(single.then_some(rest))
}

fn carries_operator(fragment: &str) -> bool {
    fragment.contains(AND)
        || fragment.contains(OR)
        || fragment.starts_with("and ")
        || fragment.starts_with("or ")
        || fragment.ends_with(" and")
        || fragment.ends_with(" or")
}
