//! Grammar validation
//!
//! Validation mirrors the builder's precedence (or, then and, then not) but needs no
//! combinators, so callers can reject malformed input before building anything.

use crate::expression::simplify::simplify;
use crate::expression::splitting::{split_and, split_or};
use crate::expression::{AND, NOT, OR};

/// Whether `s` is a well-formed filter expression.
pub fn is_valid(s: &str) -> bool {
    let Ok(source) = simplify(s) else {
        return false;
    };
    if source.is_empty() {
        return false;
    }

    if !contains_operator(source) {
        return !has_dangling_operator(source);
    }

    for split in [split_or, split_and] {
        match split(source) {
            Ok(pieces) if pieces.len() > 1 => return pieces.iter().all(|piece| is_valid(piece)),
            Ok(_) => {}
            Err(_) => return false,
        }
    }

    let mut parts = source.split(NOT);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(""), Some(negated), None) => is_valid(negated),
        _ => false,
    }
}

fn contains_operator(s: &str) -> bool {
    s.contains(AND) || s.contains(OR) || s.contains(NOT)
}

/// A term that still carries half of an operator, such as `or bob` or `alice and`.
fn has_dangling_operator(term: &str) -> bool {
    term.starts_with("or ")
        || term.starts_with("and ")
        || term.ends_with(" or")
        || term.ends_with(" and")
        || term.ends_with("not")
}
