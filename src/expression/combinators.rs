//! Caller-supplied combinators
//!
//! A [Combinators] set holds up to ten optional closures: one per operand-kind pair for `and`
//! and `or`, and one per operand kind for `not`. Leaf operands reach the closures as `&str`,
//! built operands by value. Registration is builder style:
//!
//!     Combinators::new()
//!         .and_leaf_leaf(|a, b| ...)
//!         .and_built_leaf(|a, b| ...)
//!         .not_leaf(|a| ...)
//!
//! Asking for a combination that was never registered yields
//! [ExpressionError::MissingCombinator].

use std::fmt;

use crate::expression::error::{ExpressionError, Result};
use crate::expression::operand::{Operand, OperandKind, Operator};

type LeafLeafFn<T> = Box<dyn Fn(&str, &str) -> T>;
type BuiltLeafFn<T> = Box<dyn Fn(T, &str) -> T>;
type LeafBuiltFn<T> = Box<dyn Fn(&str, T) -> T>;
type BuiltBuiltFn<T> = Box<dyn Fn(T, T) -> T>;
type LeafFn<T> = Box<dyn Fn(&str) -> T>;
type BuiltFn<T> = Box<dyn Fn(T) -> T>;

/// The four kind pairs of one binary operator
struct Binary<T> {
    leaf_leaf: Option<LeafLeafFn<T>>,
    built_leaf: Option<BuiltLeafFn<T>>,
    leaf_built: Option<LeafBuiltFn<T>>,
    built_built: Option<BuiltBuiltFn<T>>,
}

impl<T> Binary<T> {
    fn empty() -> Self {
        Self {
            leaf_leaf: None,
            built_leaf: None,
            leaf_built: None,
            built_built: None,
        }
    }

    fn supports(&self, left: OperandKind, right: OperandKind) -> bool {
        match (left, right) {
            (OperandKind::Leaf, OperandKind::Leaf) => self.leaf_leaf.is_some(),
            (OperandKind::Built, OperandKind::Leaf) => self.built_leaf.is_some(),
            (OperandKind::Leaf, OperandKind::Built) => self.leaf_built.is_some(),
            (OperandKind::Built, OperandKind::Built) => self.built_built.is_some(),
        }
    }

    fn apply(&self, left: Operand<T>, right: Operand<T>) -> Option<T> {
        match (left, right) {
            (Operand::Leaf(a), Operand::Leaf(b)) => {
                self.leaf_leaf.as_ref().map(|f| f(a.as_str(), b.as_str()))
            }
            (Operand::Built(a), Operand::Leaf(b)) => {
                self.built_leaf.as_ref().map(|f| f(a, b.as_str()))
            }
            (Operand::Leaf(a), Operand::Built(b)) => {
                self.leaf_built.as_ref().map(|f| f(a.as_str(), b))
            }
            (Operand::Built(a), Operand::Built(b)) => self.built_built.as_ref().map(|f| f(a, b)),
        }
    }

    fn registered(&self) -> Vec<&'static str> {
        [
            (self.leaf_leaf.is_some(), "leaf/leaf"),
            (self.built_leaf.is_some(), "built/leaf"),
            (self.leaf_built.is_some(), "leaf/built"),
            (self.built_built.is_some(), "built/built"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

/// Registry of combinators, keyed by operator and operand kinds
pub struct Combinators<T> {
    and: Binary<T>,
    or: Binary<T>,
    not_leaf: Option<LeafFn<T>>,
    not_built: Option<BuiltFn<T>>,
}

impl<T> Combinators<T> {
    /// An empty registry: every combination is unsupported.
    pub fn new() -> Self {
        Self {
            and: Binary::empty(),
            or: Binary::empty(),
            not_leaf: None,
            not_built: None,
        }
    }

    pub fn and_leaf_leaf(mut self, f: impl Fn(&str, &str) -> T + 'static) -> Self {
        self.and.leaf_leaf = Some(Box::new(f));
        self
    }

    pub fn and_built_leaf(mut self, f: impl Fn(T, &str) -> T + 'static) -> Self {
        self.and.built_leaf = Some(Box::new(f));
        self
    }

    pub fn and_leaf_built(mut self, f: impl Fn(&str, T) -> T + 'static) -> Self {
        self.and.leaf_built = Some(Box::new(f));
        self
    }

    pub fn and_built_built(mut self, f: impl Fn(T, T) -> T + 'static) -> Self {
        self.and.built_built = Some(Box::new(f));
        self
    }

    pub fn or_leaf_leaf(mut self, f: impl Fn(&str, &str) -> T + 'static) -> Self {
        self.or.leaf_leaf = Some(Box::new(f));
        self
    }

    pub fn or_built_leaf(mut self, f: impl Fn(T, &str) -> T + 'static) -> Self {
        self.or.built_leaf = Some(Box::new(f));
        self
    }

    pub fn or_leaf_built(mut self, f: impl Fn(&str, T) -> T + 'static) -> Self {
        self.or.leaf_built = Some(Box::new(f));
        self
    }

    pub fn or_built_built(mut self, f: impl Fn(T, T) -> T + 'static) -> Self {
        self.or.built_built = Some(Box::new(f));
        self
    }

    pub fn not_leaf(mut self, f: impl Fn(&str) -> T + 'static) -> Self {
        self.not_leaf = Some(Box::new(f));
        self
    }

    pub fn not_built(mut self, f: impl Fn(T) -> T + 'static) -> Self {
        self.not_built = Some(Box::new(f));
        self
    }

    /// Whether a combinator is registered for `operator` applied to the given kinds.
    ///
    /// `right` is ignored for [Operator::Not] and required for the binary operators.
    pub fn supports(
        &self,
        operator: Operator,
        left: OperandKind,
        right: Option<OperandKind>,
    ) -> bool {
        match (operator, right) {
            (Operator::And, Some(right)) => self.and.supports(left, right),
            (Operator::Or, Some(right)) => self.or.supports(left, right),
            (Operator::Not, _) => match left {
                OperandKind::Leaf => self.not_leaf.is_some(),
                OperandKind::Built => self.not_built.is_some(),
            },
            (Operator::And | Operator::Or, None) => false,
        }
    }

    /// Combines two operands with a binary operator.
    ///
    /// Passing [Operator::Not] is reported as a missing combinator, since `not` has no binary
    /// form.
    pub fn combine(&self, operator: Operator, left: Operand<T>, right: Operand<T>) -> Result<T> {
        let (left_kind, right_kind) = (left.kind(), right.kind());
        log::debug!("combining {left_kind} {operator} {right_kind}");

        let table = match operator {
            Operator::And => &self.and,
            Operator::Or => &self.or,
            Operator::Not => return Err(missing(operator, left_kind, Some(right_kind))),
        };
        table
            .apply(left, right)
            .ok_or_else(|| missing(operator, left_kind, Some(right_kind)))
    }

    /// Negates an operand.
    pub fn negate(&self, operand: Operand<T>) -> Result<T> {
        let kind = operand.kind();
        log::debug!("combining {} {kind}", Operator::Not);

        let negated = match operand {
            Operand::Leaf(text) => self.not_leaf.as_ref().map(|f| f(text.as_str())),
            Operand::Built(value) => self.not_built.as_ref().map(|f| f(value)),
        };
        negated.ok_or_else(|| missing(Operator::Not, kind, None))
    }
}

fn missing(operator: Operator, left: OperandKind, right: Option<OperandKind>) -> ExpressionError {
    ExpressionError::MissingCombinator {
        operator,
        left,
        right,
    }
}

impl<T> Default for Combinators<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Combinators<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not: Vec<&str> = [
            (self.not_leaf.is_some(), "leaf"),
            (self.not_built.is_some(), "built"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect();

        f.debug_struct("Combinators")
            .field("and", &self.and.registered())
            .field("or", &self.or.registered())
            .field("not", &not)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Operand<String> {
        Operand::Leaf(text.to_string())
    }

    fn built(text: &str) -> Operand<String> {
        Operand::Built(text.to_string())
    }

    fn full() -> Combinators<String> {
        Combinators::new()
            .and_leaf_leaf(|a, b| format!("and({a},{b})"))
            .and_built_leaf(|a, b| format!("and[{a}],{b}"))
            .and_leaf_built(|a, b| format!("and{a},[{b}]"))
            .and_built_built(|a, b| format!("and[{a}],[{b}]"))
            .or_leaf_leaf(|a, b| format!("or({a},{b})"))
            .or_built_built(|a, b| format!("or[{a}],[{b}]"))
            .not_leaf(|a| format!("not({a})"))
            .not_built(|a| format!("not[{a}]"))
    }

    #[test]
    fn test_dispatch_by_kind_pair() {
        let c = full();
        assert_eq!(c.combine(Operator::And, leaf("a"), leaf("b")).unwrap(), "and(a,b)");
        assert_eq!(c.combine(Operator::And, built("a"), leaf("b")).unwrap(), "and[a],b");
        assert_eq!(c.combine(Operator::And, leaf("a"), built("b")).unwrap(), "anda,[b]");
        assert_eq!(c.combine(Operator::And, built("a"), built("b")).unwrap(), "and[a],[b]");
        assert_eq!(c.negate(leaf("a")).unwrap(), "not(a)");
        assert_eq!(c.negate(built("a")).unwrap(), "not[a]");
    }

    #[test]
    fn test_missing_pair_is_reported_with_kinds() {
        let c = full();
        assert_eq!(
            c.combine(Operator::Or, built("a"), leaf("b")),
            Err(ExpressionError::MissingCombinator {
                operator: Operator::Or,
                left: OperandKind::Built,
                right: Some(OperandKind::Leaf),
            })
        );
        assert_eq!(
            Combinators::<String>::new().negate(leaf("a")),
            Err(ExpressionError::MissingCombinator {
                operator: Operator::Not,
                left: OperandKind::Leaf,
                right: None,
            })
        );
    }

    #[test]
    fn test_not_has_no_binary_form() {
        assert!(full().combine(Operator::Not, leaf("a"), leaf("b")).is_err());
    }

    #[test]
    fn test_supports() {
        let c = full();
        assert!(c.supports(Operator::Or, OperandKind::Leaf, Some(OperandKind::Leaf)));
        assert!(!c.supports(Operator::Or, OperandKind::Leaf, Some(OperandKind::Built)));
        assert!(!c.supports(Operator::And, OperandKind::Leaf, None));
        assert!(c.supports(Operator::Not, OperandKind::Built, None));
    }

    #[test]
    fn test_debug_lists_registered_pairs() {
        let rendered = format!("{:?}", Combinators::<u8>::new().or_leaf_leaf(|_, _| 0));
        assert_eq!(
            rendered,
            r#"Combinators { and: [], or: ["leaf/leaf"], not: [] }"#
        );
    }
}
