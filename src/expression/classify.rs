//! Atomic fragment classification

use crate::expression::NOT;

/// Whether `fragment` is a single parenthesized unit, optionally negated.
///
/// `(a or b)` and `not (a or b)` are atomic. The check only looks at the first significant byte
/// (after a leading `not `) and the last one, so `(a) and (b)` is classified as atomic too; the
/// operator splitter's reconstruction check is what catches such fragments.
pub fn is_term(fragment: &str) -> bool {
    let body = match fragment.strip_prefix(NOT) {
        Some(rest) if !rest.is_empty() => rest,
        _ => fragment,
    };
    body.starts_with('(') && fragment.ends_with(')')
}
