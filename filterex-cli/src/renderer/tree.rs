//! Serializable predicate trees

use filterex::Combinators;
use serde::Serialize;

/// A predicate with chains of the same operator flattened
///
/// `a and b and c` becomes one `And` with three children rather than two nested ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    Term(String),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    fn and(self, other: Predicate) -> Predicate {
        match self {
            Predicate::And(mut children) => {
                children.push(other);
                Predicate::And(children)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    fn or(self, other: Predicate) -> Predicate {
        match self {
            Predicate::Or(mut children) => {
                children.push(other);
                Predicate::Or(children)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    fn negate(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }
}

fn term(leaf: &str) -> Predicate {
    Predicate::Term(leaf.to_string())
}

/// Combinators for every operator and kind pair, building a [Predicate]
pub fn combinators() -> Combinators<Predicate> {
    Combinators::new()
        .and_leaf_leaf(|a, b| term(a).and(term(b)))
        .and_built_leaf(|a, b| a.and(term(b)))
        .and_leaf_built(|a, b| term(a).and(b))
        .and_built_built(|a, b| a.and(b))
        .or_leaf_leaf(|a, b| term(a).or(term(b)))
        .or_built_leaf(|a, b| a.or(term(b)))
        .or_leaf_built(|a, b| term(a).or(b))
        .or_built_built(|a, b| a.or(b))
        .not_leaf(|a| term(a).negate())
        .not_built(Predicate::negate)
}
