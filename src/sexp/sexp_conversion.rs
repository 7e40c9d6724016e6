/// Returns the elements as a proper Sexp list.
///
/// Elements may be anything implementing Into<Sexp>, including nested
/// list!s. An empty invocation yields Nil.
///
/// Example:
///   list!("a", 1, list!(true, 2.5), Sexp::Nil)
#[macro_export]
macro_rules! list {
    () => { $crate::sexp::Sexp::Nil };
    ($elem:expr $(, $tail:expr)* $(,)?) => {
        $crate::sexp::Sexp::cons($elem, $crate::list!($($tail),*))
    };
}


#[cfg(test)]
#[path = "./sexp_conversion_test.rs"]
mod sexp_conversion_test;
