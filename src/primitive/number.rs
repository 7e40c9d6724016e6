//! Representation of fixed-width numeric atoms.

use std::convert::TryFrom;
use std::fmt;

use self::Number::*;
use super::Primitive;
use crate::sexp::{HeapSexp, Sexp};


macro_rules! generate_number {
    (
        $($variant:ident : $type:ident),+$(,)?
    ) => {
        /// Numeric payload; the variant records the width it was built with.
        #[derive(Clone, Copy, PartialEq)]
        pub enum Number {
            $($variant($type),)+
        }

        impl fmt::Display for Number {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($variant(val) => write!(f, "{}", val),)+
                }
            }
        }

        impl fmt::Debug for Number {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($variant(val) => write!(f, "{}{}", val, stringify!($type)),)+
                }
            }
        }

        $(
            impl From<$type> for Number {
                fn from(elem: $type) -> Self {
                    Number::$variant(elem)
                }
            }

            impl TryFrom<Number> for $type {
                type Error = Number;

                fn try_from(value: Number) -> Result<Self, Self::Error> {
                    if let Number::$variant(val) = value {
                        Ok(val)
                    } else {
                        Err(value)
                    }
                }
            }

            impl From<$type> for Primitive {
                fn from(elem: $type) -> Self {
                    Primitive::Number(Number::$variant(elem))
                }
            }

            impl From<$type> for Sexp {
                fn from(elem: $type) -> Self {
                    Sexp::Primitive(Primitive::Number(Number::$variant(elem)))
                }
            }

            impl From<$type> for HeapSexp {
                fn from(elem: $type) -> Self {
                    Sexp::from(elem).into()
                }
            }
        )+
    };
}

generate_number!(
    I8: i8,
    I16: i16,
    I32: i32,
    I64: i64,
    ISize: isize,
    U8: u8,
    U16: u16,
    U32: u32,
    U64: u64,
    USize: usize,
    F32: f32,
    F64: f64,
);

impl TryFrom<Primitive> for Number {
    type Error = Primitive;

    fn try_from(value: Primitive) -> Result<Self, Self::Error> {
        if let Primitive::Number(num) = value {
            Ok(num)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Number {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Number(num)) = value {
            Ok(num)
        } else {
            Err(value)
        }
    }
}
