mod common;

use consexp::layout::{indent, minify, prettify, IndentOptions, LayoutError, MalformedReason};
use consexp::list;
use consexp::sexp::{equals, Sexp};


#[test]
fn canonical_to_pretty() {
    common::setup();

    let l = list!("A", list!("B", "C"), "D", list!("E", list!("F", "G")));
    let canonical = l.print();
    assert_eq!(canonical, "(A (B C )D (E (F G )))");
    assert_eq!(minify(&canonical), "(A(B C)D(E(F G)))");
    assert_eq!(prettify(&canonical), "(A (B C) D (E (F G)))");
    assert_eq!(indent(&canonical, 4, 80).unwrap(), "(A (B C) D (E (F G)))");
}

#[test]
fn large_tree_breaks() {
    common::setup();

    let text = common::program().print();
    let pretty = prettify(&text);
    assert!(pretty.chars().count() > 80);

    let indented = indent(&text, 4, 80).unwrap();
    assert_ne!(indented, pretty);
    assert_eq!(minify(&indented), minify(&text));

    let lines = indented.lines().collect::<Vec<_>>();
    assert!(lines.len() > 1);
    assert!(lines[0].starts_with("(Source"));
    for line in &lines[1..] {
        let depth_indent = line.len() - line.trim_start().len();
        assert!(depth_indent > 0);
        assert_eq!(depth_indent % 4, 0);
        assert!(line.trim_start().starts_with('('));
    }
}

#[test]
fn wider_cutoff_breaks_less() {
    common::setup();

    let text = common::program().print();
    let narrow = indent(&text, 2, 40).unwrap().lines().count();
    let wide = indent(&text, 2, 1000).unwrap().lines().count();
    assert_eq!(wide, 1);
    assert!(narrow > wide);
}

#[test]
fn hand_written_input() {
    common::setup();

    // Short enough for one line, but the line estimate starts at the full
    // length, so the outermost nested list still breaks.
    let text = "\t(Source\n\t\t(FunctionDecl (main)\n\t\t\t(Signature (ID[]))))";
    assert_eq!(
        indent(text, 4, 80).unwrap(),
        "(Source \n    (FunctionDecl (main) (Signature (ID[]))))"
    );
}

#[test]
fn unbalanced_is_error() {
    common::setup();

    let err = consexp::layout::indent_with("(a (b)", &IndentOptions::default()).unwrap_err();
    assert_eq!(
        err,
        LayoutError::MalformedExpression {
            reason: MalformedReason::UnmatchedOpen,
            offset: 0
        }
    );
}

#[test]
fn tree_equality() {
    common::setup();

    let cmp = |l: &Sexp, r: &Sexp| l == r;
    assert!(equals(&common::program(), &common::program(), cmp));
    assert!(!equals(&common::program(), &list!("Source"), cmp));
}
