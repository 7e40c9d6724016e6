use std::convert::TryFrom;

use super::sexp::{HeapSexp, Sexp};


/// Pair node; exclusively owns both children.
///
/// There is no way to mutate a Cons once built, so a tree of Conses can only
/// reference nodes created before it and is acyclic by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

impl Cons {
    pub fn new<L: Into<Sexp>, R: Into<Sexp>>(car: L, cdr: R) -> Cons {
        Cons {
            car: HeapSexp::new(car.into()),
            cdr: HeapSexp::new(cdr.into()),
        }
    }

    pub fn car(&self) -> &Sexp {
        &self.car
    }

    pub fn cdr(&self) -> &Sexp {
        &self.cdr
    }

    pub fn consume(mut self) -> (Sexp, Sexp) {
        let car = std::mem::take(&mut *self.car);
        let cdr = std::mem::take(&mut *self.cdr);
        (car, cdr)
    }
}

impl Drop for Cons {
    // The default drop glue recurses once per level, which overflows the
    // stack on long lists. Detach children onto a heap stack instead so that
    // every Cons is dropped with Nil children.
    fn drop(&mut self) {
        if !self.car.is_cons() && !self.cdr.is_cons() {
            return;
        }

        let mut pending = Vec::new();
        pending.push(std::mem::take(&mut *self.car));
        pending.push(std::mem::take(&mut *self.cdr));

        while let Some(sexp) = pending.pop() {
            if let Sexp::Cons(mut cons) = sexp {
                pending.push(std::mem::take(&mut *cons.car));
                pending.push(std::mem::take(&mut *cons.cdr));
            }
        }
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Cons {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl TryFrom<HeapSexp> for Cons {
    type Error = HeapSexp;

    fn try_from(value: HeapSexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = *value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
