use std::fmt;

use crate::sexp::Sexp;


/// Creates a MalformedExpression LayoutError wrapped in Err.
macro_rules! malformed {
    ($reason:ident, $offset:expr) => {
        Err($crate::layout::LayoutError::MalformedExpression {
            reason: $crate::layout::MalformedReason::$reason,
            offset: $offset,
        })
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// Parens do not balance; offset is the char offset of the offending
    /// paren in the caller's text.
    MalformedExpression {
        reason: MalformedReason,
        offset: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MalformedReason {
    UnmatchedOpen,
    UnmatchedClose,
}


impl LayoutError {
    /// Describes the error as an S-exp, e.g. (MalformedExpression UnmatchedClose 3).
    pub fn reify(&self) -> Sexp {
        match self {
            LayoutError::MalformedExpression { reason, offset } => list!(
                "MalformedExpression",
                format!("{:?}", reason),
                *offset,
            ),
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::UnmatchedOpen => write!(f, "unmatched '('"),
            MalformedReason::UnmatchedClose => write!(f, "unmatched ')'"),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MalformedExpression { reason, offset } => {
                write!(f, "MalformedExpression: {} at offset {}", reason, offset)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
