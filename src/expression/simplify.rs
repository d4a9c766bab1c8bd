//! Removal of redundant enclosing parentheses
//!
//! `((alice or bob))` simplifies to `alice or bob`, but `(alice) and (bob)` stays as it is: its
//! outer parentheses belong to two different groups, and dropping them would leave `alice) and
//! (bob`, which is not balanced.

use crate::expression::balance::{check_balance, is_balanced};
use crate::expression::error::Result;

/// Trims surrounding spaces and strips every redundant layer of wrapping parentheses.
///
/// Fails only when `s` itself is unbalanced. The result is always a sub-slice of `s`.
pub fn simplify(s: &str) -> Result<&str> {
    let trimmed = s.trim_matches(' ');
    check_balance(trimmed)?;
    Ok(strip_wrapping(trimmed))
}

/// Unwraps `s` while the text inside the outer pair is still balanced.
///
/// `s` must already be trimmed and balanced. Each step removes at least the two wrapping bytes.
fn strip_wrapping(mut s: &str) -> &str {
    while let Some(inner) = unwrap_once(s) {
        s = inner.trim_matches(' ');
    }
    s
}

/// The text between a wrapping `(` ... `)` pair, when that pair can be dropped.
fn unwrap_once(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    is_balanced(inner).then_some(inner)
}
