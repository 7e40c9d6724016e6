use consexp::list;
use consexp::sexp::Sexp;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

/// Syntax tree of a small program, shaped like a parser front-end would
/// emit it.
pub fn program() -> Sexp {
    let get_xy = || list!("Get", list!("x"), list!("y"));
    let expr = |e: Sexp| list!("Expr", e);

    list!(
        "Source",
        list!(
            "FunctionDecl",
            list!("main"),
            list!("Signature", list!("ID[]")),
            list!(
                "Block",
                list!(
                    "ConstDecl",
                    list!("ID[]", list!("x")),
                    list!("Expr[]", expr(list!(8)))
                ),
                expr(list!("+", list!("*", list!("x"), list!(8)), list!(3))),
                expr(list!("+", list!("x"), list!("/", list!(3), list!(4)))),
                expr(list!(
                    "Call",
                    list!("f"),
                    list!("Expr[]", expr(list!("x")), expr(get_xy()))
                )),
                list!(
                    "Assign",
                    list!("Expr[]", expr(list!("x")), expr(get_xy())),
                    list!("Expr[]", expr(get_xy()), expr(list!("x")))
                )
            )
        )
    )
}
