//! Text renderers for S-exps.

use std::cell::RefCell;

use super::sexp::Sexp;
use super::traverse::preorder;


impl Sexp {
    /// Fully parenthesized form, e.g. `(1 . (2 . nil))`.
    pub fn print_dotted(&self) -> String {
        enum Piece<'a> {
            Node(&'a Sexp),
            Lit(&'static str),
        }

        let mut s = String::new();
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Lit(lit) => s.push_str(lit),
                Piece::Node(Sexp::Nil) => s.push_str("nil"),
                Piece::Node(Sexp::Primitive(primitive)) => s.push_str(&primitive.to_string()),
                Piece::Node(Sexp::Cons(cons)) => {
                    s.push('(');
                    stack.push(Piece::Lit(")"));
                    stack.push(Piece::Node(cons.cdr()));
                    stack.push(Piece::Lit(" . "));
                    stack.push(Piece::Node(cons.car()));
                }
            }
        }
        s
    }

    /// Canonical list form.
    ///
    /// Every atom is followed by a space and close parens are not, so
    /// `(1 (2 3) 4)` prints as `(1 (2 3 )4 )`. Nil elements are empty lists
    /// and print as `()`. Run the result through layout::minify or
    /// layout::prettify for regular spacing.
    pub fn print(&self) -> String {
        if self.is_nil() {
            return "()".to_string();
        }

        // preorder takes two FnMut callbacks, which cannot both hold a
        // &mut String; they share it through a RefCell instead.
        let s = RefCell::new(String::new());
        preorder(
            self,
            |node| {
                let mut s = s.borrow_mut();
                match node {
                    Sexp::Primitive(primitive) => s.push_str(&primitive.to_string()),
                    Sexp::Cons(_) | Sexp::Nil => s.push('('),
                }
            },
            |node| {
                let mut s = s.borrow_mut();
                match node {
                    Sexp::Primitive(_) => s.push(' '),
                    Sexp::Cons(_) | Sexp::Nil => s.push(')'),
                }
            },
        );
        s.into_inner()
    }
}


#[cfg(test)]
#[path = "./render_test.rs"]
mod render_test;
