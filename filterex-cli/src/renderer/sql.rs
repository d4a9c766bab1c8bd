//! SQL `WHERE` fragments
//!
//! Leaf terms are compared against the configured column with the configured templates, binary
//! operators wrap both sides in parentheses:
//!
//!     alice and not bob   ->   (col = 'alice' AND col <> 'bob')
//!
//! Quotes inside a term are doubled (`o'brien` -> `'o''brien'`); the column name is not escaped.

use std::rc::Rc;

use filterex::Combinators;
use filterex_config::RenderConfig;

/// A leaf term compared against the configured column
pub fn term(config: &RenderConfig, leaf: &str) -> String {
    config.term(&config.term_template, leaf)
}

fn negated_term(config: &RenderConfig, leaf: &str) -> String {
    config.term(&config.negated_term_template, leaf)
}

fn join(left: &str, keyword: &str, right: &str) -> String {
    format!("({left} {keyword} {right})")
}

/// Combinators for every operator and kind pair, rendering to SQL text
pub fn combinators(config: &RenderConfig) -> Combinators<String> {
    let config = Rc::new(config.clone());
    let c = || Rc::clone(&config);

    let (and_ll, and_bl, and_lb, and_bb) = (c(), c(), c(), c());
    let (or_ll, or_bl, or_lb, or_bb) = (c(), c(), c(), c());
    let (not_l, not_b) = (c(), c());

    Combinators::new()
        .and_leaf_leaf(move |a, b| {
            join(&term(&and_ll, a), &and_ll.and_keyword, &term(&and_ll, b))
        })
        .and_built_leaf(move |a, b| join(&a, &and_bl.and_keyword, &term(&and_bl, b)))
        .and_leaf_built(move |a, b| join(&term(&and_lb, a), &and_lb.and_keyword, &b))
        .and_built_built(move |a, b| join(&a, &and_bb.and_keyword, &b))
        .or_leaf_leaf(move |a, b| join(&term(&or_ll, a), &or_ll.or_keyword, &term(&or_ll, b)))
        .or_built_leaf(move |a, b| join(&a, &or_bl.or_keyword, &term(&or_bl, b)))
        .or_leaf_built(move |a, b| join(&term(&or_lb, a), &or_lb.or_keyword, &b))
        .or_built_built(move |a, b| join(&a, &or_bb.or_keyword, &b))
        .not_leaf(move |a| negated_term(&not_l, a))
        .not_built(move |a| not_b.not_template.replace("{inner}", &a))
}
