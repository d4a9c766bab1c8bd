//! Parenthesis-aware splitting
//!
//! Fragmenting
//!
//!     [split_parentheses] cuts a simplified expression into top-level parenthesized groups and
//!     the connecting text between them, keeping every byte:
//!
//!         (alice or bob) and carol     ->  ["(alice or bob)", " and carol"]
//!         alice or (bob and carol)     ->  ["alice or ", "(bob and carol)"]
//!
//!     A `not ` directly in front of a group stays attached to the group, and `" and not "` /
//!     `" or not "` separators hand their `not` over to the next fragment, so negation never
//!     dangles on its own.
//!
//! Operator splitting
//!
//!     [split_by] keeps atomic fragments whole and cuts the rest on the operator. Without a
//!     tokenizer this can go wrong when operators are mixed at one nesting level, so the pieces
//!     are joined back and compared with the input. Any difference and the input is returned as a
//!     single piece: "nothing to split at this precedence level".

use crate::expression::classify::is_term;
use crate::expression::error::{Imbalance, Result};
use crate::expression::simplify::simplify;
use crate::expression::{AND, NOT, OR};

/// Splits a simplified `s` into top-level groups and connecting text.
pub fn split_parentheses(s: &str) -> Result<Vec<String>> {
    let source = simplify(s)?;

    let mut fragments: Vec<String> = Vec::new();
    let mut outside = String::new();
    let mut depth = 0usize;
    // Start of the span not yet assigned to a fragment (or to `outside`)
    let mut start = 0;

    for (i, c) in source.char_indices() {
        match c {
            '(' => {
                if depth == 0 && !outside.is_empty() && outside != NOT {
                    log::trace!("fragment {outside:?} flushed before group");
                    fragments.push(std::mem::take(&mut outside));
                }
                depth += 1;
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(Imbalance::UnmatchedClose { position: i })?;
            }
            _ => {}
        }

        if depth == 0 {
            let end = i + c.len_utf8();
            if start == i {
                outside.push(c);
            } else {
                // A group just closed: it takes any held-back `not ` with it
                outside.push_str(&source[start..end]);
                log::trace!("group fragment {outside:?}");
                fragments.push(std::mem::take(&mut outside));
            }
            start = end;
        }
    }

    if !outside.is_empty() {
        fragments.push(outside);
    }

    attach_dangling_not(&mut fragments);
    Ok(fragments)
}

/// Moves the `not` of `" and not "` / `" or not "` separators onto the fragment that follows.
fn attach_dangling_not(fragments: &mut [String]) {
    for i in 0..fragments.len().saturating_sub(1) {
        let separator = match fragments[i].as_str() {
            " and not " => AND,
            " or not " => OR,
            _ => continue,
        };
        fragments[i] = separator.to_string();
        fragments[i + 1].insert_str(0, NOT);
    }
}

/// Splits `s` on top-level `" or "`.
pub fn split_or(s: &str) -> Result<Vec<String>> {
    split_by(OR, s)
}

/// Splits `s` on top-level `" and "`.
pub fn split_and(s: &str) -> Result<Vec<String>> {
    split_by(AND, s)
}

/// Splits `s` on `operator` wherever it is not inside an atomic group.
///
/// Returns `[s]` unchanged when the pieces, joined back with `operator`, do not reproduce `s`.
pub fn split_by(operator: &str, s: &str) -> Result<Vec<String>> {
    let mut pieces = Vec::new();
    for fragment in split_parentheses(s)? {
        if is_term(&fragment) {
            pieces.push(fragment);
        } else {
            pieces.extend(
                fragment
                    .split(operator)
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );
        }
    }

    if pieces.join(operator) != s {
        log::trace!("split of {s:?} on {operator:?} does not reconstruct, keeping it whole");
        return Ok(vec![s.to_string()]);
    }

    Ok(pieces)
}
