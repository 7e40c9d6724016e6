//! Representation of atom payloads.

use std::convert::TryFrom;
use std::fmt;

pub mod number;

pub use self::number::Number;
use crate::sexp::{HeapSexp, Sexp};


/// Scalar carried by an atom.
///
/// The terminator is not a Primitive; it is represented directly by
/// Sexp::Nil.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Number(Number),
    Text(String),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "{}", b),
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<Number> for Primitive {
    fn from(num: Number) -> Self {
        Primitive::Number(num)
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::Text(s)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::Text(s.to_string())
    }
}

// Impl From<T> for Sexp-likes over everything convertible to a Primitive.
macro_rules! sexp_from {
    ($from:ty, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::Primitive(Primitive::from(elem))
            }
        }
        impl From<$from> for HeapSexp {
            fn from(elem: $from) -> Self {
                Self::new(Sexp::Primitive(Primitive::from(elem)))
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(bool, Number, String, &str,);

impl TryFrom<Primitive> for bool {
    type Error = Primitive;

    fn try_from(value: Primitive) -> Result<Self, Self::Error> {
        if let Primitive::Bool(b) = value {
            Ok(b)
        } else {
            Err(value)
        }
    }
}

impl TryFrom<Primitive> for String {
    type Error = Primitive;

    fn try_from(value: Primitive) -> Result<Self, Self::Error> {
        if let Primitive::Text(s) = value {
            Ok(s)
        } else {
            Err(value)
        }
    }
}
