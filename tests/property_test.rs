mod common;

use proptest::prelude::*;

use consexp::layout::{indent, minify, prettify};
use consexp::sexp::{equals, Sexp};


fn arb_sexp() -> impl Strategy<Value = Sexp> {
    let leaf = prop_oneof![
        "[a-zA-Z][a-zA-Z0-9_.]{0,5}".prop_map(Sexp::from),
        any::<i32>().prop_map(Sexp::from),
        any::<bool>().prop_map(Sexp::from),
        Just(Sexp::Nil),
    ];
    leaf.prop_recursive(6, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Sexp::list)
    })
}

// Canonical text with some extra whitespace sprinkled around the parens.
fn arb_text() -> impl Strategy<Value = String> {
    (arb_sexp(), "[ \t\n]{0,3}").prop_map(|(sexp, ws)| {
        sexp.print()
            .replace('(', &format!("{}({}", ws, ws))
            .replace(')', &format!("){}", ws))
    })
}

proptest! {
    #[test]
    fn equals_is_reflexive(t in arb_sexp()) {
        prop_assert!(equals(&t, &t, |l, r| l == r));
    }

    #[test]
    fn prettify_is_idempotent(s in arb_text()) {
        let once = prettify(&s);
        prop_assert_eq!(prettify(&once), once);
    }

    #[test]
    fn prettify_keeps_tokens(s in arb_text()) {
        prop_assert_eq!(minify(prettify(&s)), minify(&s));
    }

    #[test]
    fn indent_only_changes_whitespace(s in arb_text(), width in 1usize..8, cutoff in 1usize..120) {
        common::setup();

        let indented = indent(&s, width, cutoff).unwrap();
        prop_assert_eq!(minify(&indented), minify(&s));
        prop_assert!(!indented.starts_with('\n'));
        // Everything before the first break is untouched.
        let first_line = indented.lines().next().unwrap_or("");
        prop_assert!(prettify(&s).starts_with(first_line));
    }
}
