//! Combinator dispatch as seen from the caller
//!
//! A recording combinator set logs every call it receives, so the tests can check which
//! combinator ran, with which arguments, and in what order.

use std::cell::RefCell;
use std::rc::Rc;

use filterex::{Combinators, ExpressionBuilder, ExpressionError, Operand, OperandKind, Operator};

type Calls = Rc<RefCell<Vec<String>>>;

/// Built values are numbered so a call can refer to the value an earlier call produced.
fn recording(calls: &Calls) -> Combinators<usize> {
    let record = |calls: &Calls, entry: String| {
        let mut calls = calls.borrow_mut();
        calls.push(entry);
        calls.len()
    };

    let (c1, c2, c3, c4) = (calls.clone(), calls.clone(), calls.clone(), calls.clone());
    let (c5, c6, c7, c8) = (calls.clone(), calls.clone(), calls.clone(), calls.clone());
    let (c9, c10) = (calls.clone(), calls.clone());

    Combinators::new()
        .and_leaf_leaf(move |a, b| record(&c1, format!("AND({a}, {b})")))
        .and_built_leaf(move |a, b| record(&c2, format!("AND(#{a}, {b})")))
        .and_leaf_built(move |a, b| record(&c3, format!("AND({a}, #{b})")))
        .and_built_built(move |a, b| record(&c4, format!("AND(#{a}, #{b})")))
        .or_leaf_leaf(move |a, b| record(&c5, format!("OR({a}, {b})")))
        .or_built_leaf(move |a, b| record(&c6, format!("OR(#{a}, {b})")))
        .or_leaf_built(move |a, b| record(&c7, format!("OR({a}, #{b})")))
        .or_built_built(move |a, b| record(&c8, format!("OR(#{a}, #{b})")))
        .not_leaf(move |a| record(&c9, format!("NOT({a})")))
        .not_built(move |a| record(&c10, format!("NOT(#{a})")))
}

fn build_calls(source: &str) -> (Operand<usize>, Vec<String>) {
    let calls = Calls::default();
    let builder = ExpressionBuilder::new(recording(&calls));
    let operand = builder.build(source).expect("expression to build");
    let calls = calls.borrow().clone();
    (operand, calls)
}

#[test]
fn test_and_chain_then_or() {
    let (operand, calls) = build_calls("alice and bob and carol or dan");
    assert_eq!(
        calls,
        vec!["AND(alice, bob)", "AND(#1, carol)", "OR(#2, dan)"]
    );
    assert_eq!(operand, Operand::Built(3));
}

#[test]
fn test_only_the_needed_combinators_are_required() {
    let calls = Calls::default();
    let (and_calls, or_calls) = (calls.clone(), calls.clone());
    let and_more = calls.clone();
    let builder = ExpressionBuilder::new(
        Combinators::new()
            .and_leaf_leaf(move |a, b| {
                and_calls.borrow_mut().push(format!("{a}&{b}"));
                1
            })
            .and_built_leaf(move |a, b| {
                and_more.borrow_mut().push(format!("#{a}&{b}"));
                2
            })
            .or_built_leaf(move |a, b| {
                or_calls.borrow_mut().push(format!("#{a}|{b}"));
                3
            }),
    );

    let built = builder.build("alice and bob and carol or dan").unwrap();
    assert_eq!(built, Operand::Built(3));
    assert_eq!(*calls.borrow(), vec!["alice&bob", "#1&carol", "#2|dan"]);
}

#[test]
fn test_not_leaf_alone() {
    let calls = Calls::default();
    let seen = calls.clone();
    let builder = ExpressionBuilder::new(Combinators::new().not_leaf(move |a| {
        seen.borrow_mut().push(a.to_string());
        "col <> 'alice'".to_string()
    }));

    let built = builder.build("not alice").unwrap();
    assert_eq!(built, Operand::Built("col <> 'alice'".to_string()));
    assert_eq!(*calls.borrow(), vec!["alice"]);
}

#[test]
fn test_leaf_or_grouped_and() {
    let (_, calls) = build_calls("alice or (bob and carol)");
    assert_eq!(calls, vec!["AND(bob, carol)", "OR(alice, #1)"]);
}

#[test]
fn test_grouped_or_and_leaf() {
    let (_, calls) = build_calls("(alice or bob) and carol");
    assert_eq!(calls, vec!["OR(alice, bob)", "AND(#1, carol)"]);
}

#[test]
fn test_two_groups() {
    let (_, calls) = build_calls("(alice or bob) and (carol or dan)");
    assert_eq!(
        calls,
        vec!["OR(alice, bob)", "OR(carol, dan)", "AND(#1, #2)"]
    );
}

#[test]
fn test_negated_groups() {
    let (_, calls) =
        build_calls("((alice or bob) and not (carol or dan)) or (elen and not frank)");
    insta::assert_snapshot!(
        calls.join(" ; "),
        @"OR(alice, bob) ; OR(carol, dan) ; NOT(#2) ; AND(#1, #3) ; NOT(frank) ; AND(elen, #5) ; OR(#4, #6)"
    );
}

#[test]
fn test_bare_term_calls_nothing() {
    let (operand, calls) = build_calls("((alice))");
    assert_eq!(operand, Operand::Leaf("alice".to_string()));
    assert!(calls.is_empty());
}

#[test]
fn test_not_before_compound_text_calls_nothing() {
    for source in ["not elen and not (frank or glenn)", "not a or", "not elen and"] {
        let (operand, calls) = build_calls(source);
        assert_eq!(operand, Operand::Leaf(source.to_string()));
        assert!(calls.is_empty(), "{source:?} called {calls:?}");
    }
}

#[test]
fn test_missing_combinator_names_the_gap() {
    let builder = ExpressionBuilder::new(Combinators::new().or_leaf_leaf(|_, _| 0u8));
    let err = builder.build("alice or bob or carol").unwrap_err();
    assert_eq!(
        err,
        ExpressionError::MissingCombinator {
            operator: Operator::Or,
            left: OperandKind::Built,
            right: Some(OperandKind::Leaf),
        }
    );
    assert_eq!(err.to_string(), "no OR combinator registered for (built, leaf)");
}

#[test]
fn test_missing_not_combinator() {
    let builder = ExpressionBuilder::new(Combinators::<u8>::new().not_leaf(|_| 0));
    assert_eq!(
        builder.build("not (alice and bob)").unwrap_err(),
        ExpressionError::MissingCombinator {
            operator: Operator::And,
            left: OperandKind::Leaf,
            right: Some(OperandKind::Leaf),
        }
    );
}

#[test]
fn test_no_combinator_runs_after_a_parenthesis_error() {
    let calls = Calls::default();
    let builder = ExpressionBuilder::new(recording(&calls));
    assert!(matches!(
        builder.build("alice and (bob or carol))"),
        Err(ExpressionError::Parentheses(_))
    ));
    assert!(calls.borrow().is_empty());
}
