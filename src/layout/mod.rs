//! Reformatting of S-exp text.
//!
//! Every stage works on text alone, never on a Sexp, so it can be fed the
//! output of Sexp::print or text produced elsewhere:
//!
//!   Sexp::print -> minify -> prettify -> indent
//!
//! Input is plain list syntax: parens delimit lists, whitespace separates
//! atoms, and there is no quoting. Only indent checks that parens balance.

#[macro_use]
mod layout_error;

pub mod color;
pub mod indent;
pub mod minify;


pub use color::colorize;
pub use indent::{indent, indent_with, spans, validate, IndentOptions, Span};
pub use layout_error::{LayoutError, MalformedReason};
pub use minify::{minify, prettify};
