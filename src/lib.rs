//! Cons-cell trees and their textual rendering.
//!
//! A Sexp is Nil, an atom carrying a Primitive, or a Cons owning two
//! Sexps. Trees are built with Sexp::atom, Sexp::cons, Sexp::list or list!,
//! compared with sexp::equals, walked with sexp::traverse, and printed with
//! Sexp::print / Sexp::print_dotted. The layout module then reformats the
//! printed text for reading.
//!
//! Note that this crate does *not* set up logging; clients should take care
//! of that. See:
//!   https://github.com/rust-lang/log#in-executables.


#[macro_use]
pub mod sexp;
pub mod layout;
pub mod primitive;

pub mod prelude {
    pub use crate::layout::{
        colorize, indent, indent_with, minify, prettify, IndentOptions, LayoutError,
    };
    pub use crate::primitive::{Number, Primitive};
    pub use crate::sexp::traverse::{postorder, preorder};
    pub use crate::sexp::{cons, equals, try_equals, Cons, HeapSexp, Sexp};
    // Macros.
    pub use crate::list;
}
