//! Operands and operators handled by the builder

use std::fmt;

/// A built fragment of an expression.
///
/// The parser never inspects `T`; it only moves built values from one combinator call to the
/// next and hands the last one back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<T> {
    /// A term that was not decomposed further, verbatim
    Leaf(String),
    /// A value produced by a combinator
    Built(T),
}

impl<T> Operand<T> {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Leaf(_) => OperandKind::Leaf,
            Operand::Built(_) => OperandKind::Built,
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Operand::Leaf(text) => Some(text),
            Operand::Built(_) => None,
        }
    }

    pub fn into_built(self) -> Option<T> {
        match self {
            Operand::Built(value) => Some(value),
            Operand::Leaf(_) => None,
        }
    }

    /// Collapses the operand into a single type, turning a bare leaf into a value with `leaf`.
    pub fn unwrap_or_else_leaf(self, leaf: impl FnOnce(String) -> T) -> T {
        match self {
            Operand::Leaf(text) => leaf(text),
            Operand::Built(value) => value,
        }
    }
}

/// Discriminant of [Operand], used to pick a combinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Leaf,
    Built,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Leaf => write!(f, "leaf"),
            OperandKind::Built => write!(f, "built"),
        }
    }
}

/// Boolean operators of the expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => write!(f, "AND"),
            Operator::Or => write!(f, "OR"),
            Operator::Not => write!(f, "NOT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(Operand::<u8>::Leaf("a".into()).kind(), OperandKind::Leaf);
        assert_eq!(Operand::Built(1u8).kind(), OperandKind::Built);
    }

    #[test]
    fn test_accessors() {
        let leaf: Operand<u8> = Operand::Leaf("alice".into());
        assert_eq!(leaf.as_leaf(), Some("alice"));
        assert_eq!(leaf.clone().into_built(), None);
        assert_eq!(leaf.unwrap_or_else_leaf(|text| text.len() as u8), 5);
        assert_eq!(Operand::Built(7u8).into_built(), Some(7));
    }
}
