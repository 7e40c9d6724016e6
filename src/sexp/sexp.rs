//! Module for representing S-exps.

use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;

use super::cons::Cons;
use crate::primitive::Primitive;


/// S-exp on the heap.
///
/// Cons stores its children as HeapSexps so that a Sexp has a fixed size.
pub type HeapSexp = Box<Sexp>;

/// Node of a cons-cell tree.
///
/// Nil is both the empty list and the tail of every proper list; it is
/// considered an atom.
#[derive(Clone, PartialEq)]
pub enum Sexp {
    Nil,
    Primitive(Primitive),
    Cons(Cons),
}

// Returned by car/cdr of non-Cons Sexps.
static NIL: Sexp = Sexp::Nil;

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}

impl Sexp {
    /// Wraps a scalar into an atom.
    pub fn atom<P: Into<Primitive>>(value: P) -> Sexp {
        Sexp::Primitive(value.into())
    }

    /// Builds a pair. Scalars are wrapped into atoms; Sexps are used as-is.
    pub fn cons<L: Into<Sexp>, R: Into<Sexp>>(car: L, cdr: R) -> Sexp {
        Sexp::Cons(Cons::new(car, cdr))
    }

    /// Builds a proper list; an empty sequence yields Nil.
    pub fn list<I>(values: I) -> Sexp
    where
        I: IntoIterator,
        I::Item: Into<Sexp>,
    {
        let elements = values.into_iter().map(Into::into).collect::<Vec<Sexp>>();
        elements
            .into_iter()
            .rev()
            .fold(Sexp::Nil, |tail, elem| Sexp::cons(elem, tail))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    pub fn is_atom(&self) -> bool {
        !self.is_cons()
    }

    pub fn is_cons(&self) -> bool {
        matches!(self, Sexp::Cons(_))
    }

    /// Left child of a Cons; Nil for anything else.
    pub fn car(&self) -> &Sexp {
        match self {
            Sexp::Cons(cons) => cons.car(),
            _ => &NIL,
        }
    }

    /// Right child of a Cons; Nil for anything else.
    pub fn cdr(&self) -> &Sexp {
        match self {
            Sexp::Cons(cons) => cons.cdr(),
            _ => &NIL,
        }
    }

    pub fn primitive(&self) -> Option<&Primitive> {
        match self {
            Sexp::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(self),
        }
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the Sexp is a non-Nil atom in tail position
    // (either an improper tail or a top-level atom) and is necessarily the
    // last element. Nil ends iteration without being yielded.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            Some(Sexp::Cons(cons)) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Some(Sexp::Nil) | None => None,
            Some(atom) => Some((atom, false)),
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    // (Sexp, from_cons). See impl Iterator block above for more info.
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

impl fmt::Display for Sexp {
    /// Canonical list form by default; dotted form with {:#}.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.print_dotted())
        } else {
            write!(f, "{}", self.print())
        }
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print_dotted())
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Primitive {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Primitive {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}


// From<T> impls.
impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        HeapSexp::new(Sexp::Cons(cons))
    }
}

impl From<HeapSexp> for Sexp {
    fn from(sexp: HeapSexp) -> Self {
        *sexp
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        Sexp::list(vec)
    }
}

impl<'a, T: Into<Sexp> + Clone> From<&'a Vec<T>> for Sexp {
    fn from(vec: &'a Vec<T>) -> Self {
        Sexp::list(vec.iter().cloned())
    }
}

impl<T: Into<Sexp>> FromIterator<T> for Sexp {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sexp::list(iter)
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
