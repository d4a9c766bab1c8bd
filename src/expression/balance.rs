//! Parenthesis balance checking
//!
//! Every structural operation runs this first. Unbalanced text never reaches the splitters.

use crate::expression::error::Imbalance;

/// Checks that parentheses in `s` nest properly.
///
/// Fails as soon as the running depth goes negative, reporting the byte offset of the offending
/// `)`. Text that ends with open groups fails with the remaining depth.
pub fn check_balance(s: &str) -> Result<(), Imbalance> {
    let mut depth = 0usize;
    for (position, byte) in s.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(Imbalance::UnmatchedClose { position })?;
            }
            _ => {}
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(Imbalance::Unclosed { depth })
    }
}

/// Boolean form of [check_balance].
pub fn is_balanced(s: &str) -> bool {
    check_balance(s).is_ok()
}
