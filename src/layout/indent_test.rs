use super::*;

use crate::layout::MalformedReason::*;


const NESTED: &str = "(A (B C )D (E (F G )))";

fn span(begin: usize, end: usize, depth: usize) -> Span {
    Span { begin, end, depth }
}

#[test]
fn spans_in_closing_order() {
    let found = spans("(A (B C) D (E (F G)))").unwrap();
    assert_eq!(
        found,
        vec![span(3, 7, 1), span(14, 18, 2), span(11, 19, 1), span(0, 20, 0)]
    );
    assert_eq!(found[2].len(), 9);
    assert_eq!(*found[1].depth(), 2);
}

#[test]
fn unmatched_close() {
    assert_eq!(
        spans("(A))"),
        Err(LayoutError::MalformedExpression {
            reason: UnmatchedClose,
            offset: 3,
        })
    );
    assert!(validate(")").is_err());
}

#[test]
fn unmatched_open() {
    assert_eq!(
        validate("((A) (B"),
        Err(LayoutError::MalformedExpression {
            reason: UnmatchedOpen,
            offset: 5,
        })
    );
}

#[test]
fn fits_on_one_line() {
    assert_eq!(indent(NESTED, 4, 80).unwrap(), "(A (B C) D (E (F G)))");
    assert_eq!(
        indent_with(NESTED, &IndentOptions::default()).unwrap(),
        "(A (B C) D (E (F G)))"
    );
}

#[test]
fn breaks_first_closed_subexpression() {
    // Line estimate starts at the full length, so the first non-root span
    // to close always breaks once the text itself is long.
    assert_eq!(indent(NESTED, 2, 20).unwrap(), "(A \n  (B C) D (E (F G)))");
}

#[test]
fn breaks_greedily() {
    assert_eq!(
        indent(NESTED, 2, 12).unwrap(),
        "(A \n  (B C) D \n  (E \n    (F G)))"
    );
}

#[test]
fn never_breaks_root() {
    let out = indent("(a b c d e f g h i j k l m n o p)", 4, 1).unwrap();
    assert_eq!(out, "(a b c d e f g h i j k l m n o p)");
}

#[test]
fn atoms_and_empty() {
    assert_eq!(indent("  Hello \n", 4, 80).unwrap(), "Hello");
    assert_eq!(indent("", 4, 80).unwrap(), "");
    assert_eq!(indent("()", 4, 80).unwrap(), "()");
}

#[test]
fn rejects_unbalanced() {
    assert_eq!(
        indent("(A (B C)", 4, 80),
        Err(LayoutError::MalformedExpression {
            reason: UnmatchedOpen,
            offset: 0,
        })
    );
    // Offsets refer to the caller's text, not the prettified one.
    assert_eq!(
        indent("(A   B))", 4, 80),
        Err(LayoutError::MalformedExpression {
            reason: UnmatchedClose,
            offset: 7,
        })
    );
}

#[test]
fn options_builder() {
    let options = IndentOptions::default().with_width(2).with_cutoff(12);
    assert_eq!(options, IndentOptions { width: 2, cutoff: 12 });
    assert_eq!(
        indent_with(NESTED, &options).unwrap(),
        indent(NESTED, 2, 12).unwrap()
    );
}

#[test]
fn counts_chars_not_bytes() {
    let found = spans("(λ (μ))").unwrap();
    assert_eq!(found, vec![span(3, 5, 1), span(0, 6, 0)]);
}
