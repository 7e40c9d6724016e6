#[macro_use]
mod sexp_conversion;

pub mod compare;
pub mod cons;
pub mod render;
pub mod sexp;
pub mod traverse;


pub use compare::{equals, try_equals};
pub use cons::Cons;
pub use sexp::{HeapSexp, Sexp, SexpIter};

/// Builds a pair; see Sexp::cons.
pub fn cons<L: Into<Sexp>, R: Into<Sexp>>(car: L, cdr: R) -> Sexp {
    Sexp::cons(car, cdr)
}
