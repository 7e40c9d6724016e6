//! Structural equality of S-exps under a caller-supplied atom comparison.

use std::convert::Infallible;

use super::sexp::Sexp;


/// Compares two trees structurally.
///
/// As soon as either side is an atom (Nil included) the pair of nodes is
/// handed to cmp, even if the other side is a Cons; only when both sides are
/// Conses does the comparison descend, car before cdr. Stops at the first
/// mismatch.
pub fn equals<F>(lhs: &Sexp, rhs: &Sexp, mut cmp: F) -> bool
where
    F: FnMut(&Sexp, &Sexp) -> bool,
{
    match try_equals(lhs, rhs, |l, r| Ok::<bool, Infallible>(cmp(l, r))) {
        Ok(eq) => eq,
        Err(never) => match never {},
    }
}

/// Like equals, but propagates the first error cmp returns.
pub fn try_equals<F, E>(lhs: &Sexp, rhs: &Sexp, mut cmp: F) -> Result<bool, E>
where
    F: FnMut(&Sexp, &Sexp) -> Result<bool, E>,
{
    let mut pending = vec![(lhs, rhs)];
    while let Some((l, r)) = pending.pop() {
        if l.is_atom() || r.is_atom() {
            if !cmp(l, r)? {
                return Ok(false);
            }
            continue;
        }

        pending.push((l.cdr(), r.cdr()));
        pending.push((l.car(), r.car()));
    }
    Ok(true)
}

impl Sexp {
    pub fn equals<F>(&self, other: &Sexp, cmp: F) -> bool
    where
        F: FnMut(&Sexp, &Sexp) -> bool,
    {
        equals(self, other, cmp)
    }
}


#[cfg(test)]
#[path = "./compare_test.rs"]
mod compare_test;
