//! Filter expression parsing
//!
//!     The pipeline is strictly one way:
//!
//!         raw text -> simplify -> split_or / split_and -> builder -> combined value
//!
//!     There is no tokenizer. Every stage works on the raw text and leaves terms untouched, so the
//!     splitters can only be trusted when joining their output back reproduces the input. The
//!     operator splitter checks exactly that and refuses to split otherwise.
//!
//! Modules, leaf-first:
//!
//!     - [balance]: parenthesis nesting checks.
//!     - [simplify]: removal of redundant outer parentheses.
//!     - [classify]: recognition of atomic (optionally negated) parenthesized fragments.
//!     - [splitting]: parenthesis-aware fragmenting and operator splitting.
//!     - [validate]: grammar validation.
//!     - [operand], [combinators], [builder]: the recursive builder and its dispatch table.

pub mod balance;
pub mod builder;
pub mod classify;
pub mod combinators;
pub mod error;
pub mod operand;
pub mod simplify;
pub mod splitting;
pub mod validate;

pub use balance::{check_balance, is_balanced};
pub use classify::is_term;
pub use simplify::simplify;
pub use splitting::{split_and, split_by, split_or, split_parentheses};

/// Separator placed between operands joined by `or`.
pub const OR: &str = " or ";

/// Separator placed between operands joined by `and`.
pub const AND: &str = " and ";

/// Prefix marking a negated operand.
pub const NOT: &str = "not ";
