//! Reformats S-exp text read from a file or stdin.
//!
//! Run as:  `cat tree.sexp | RUST_LOG=debug cargo run --example sexpfmt -- -c 60`.
//! Or:      `cargo run --example sexpfmt -- --mode prettify tree.sexp`.
//!
//! Without input, the demo renders a small built-in syntax tree instead, which
//! is the only case where `--mode dotted` is available.

use clap::{Arg, Command};
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, Read};

use consexp::layout::{self, IndentOptions};
use consexp::list;
use consexp::sexp::Sexp;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Parse args.
    let matches = Command::new("sexpfmt")
        .version("0.1")
        .about("Minifies, prettifies or indents S-exp text")
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .takes_value(true)
                .possible_values(&["minify", "prettify", "indent", "dotted"])
                .default_value("indent")
                .help("Output style"),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .takes_value(true)
                .help("Indentation columns per nesting level"),
        )
        .arg(
            Arg::new("cutoff")
                .short('c')
                .long("cutoff")
                .takes_value(true)
                .help("Line length past which sub-expressions are broken out"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Colour parens by nesting depth"),
        )
        .arg(
            Arg::new("stdin")
                .short('i')
                .long("stdin")
                .help("Read the expression from stdin"),
        )
        .arg(Arg::new("FILE").help("File holding the expression"))
        .get_matches();

    let mut options = IndentOptions::default();
    if let Some(width) = matches.value_of("width") {
        options.width = parse_usize("width", width)?;
    }
    if let Some(cutoff) = matches.value_of("cutoff") {
        options.cutoff = parse_usize("cutoff", cutoff)?;
    }

    let mode = matches.value_of("mode").unwrap_or("indent");
    let text = match (matches.value_of("FILE"), matches.is_present("stdin")) {
        (Some(path), _) => Some(fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?),
        (None, true) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("stdin: {}", e))?;
            Some(buf)
        }
        (None, false) => None,
    };

    let output = match text {
        Some(text) => render_text(&text, mode, &options)?,
        None => {
            info!("No input given; rendering built-in tree.");
            let tree = sample();
            if mode == "dotted" {
                tree.print_dotted()
            } else {
                render_text(&tree.print(), mode, &options)?
            }
        }
    };

    if matches.is_present("color") {
        println!("{}", layout::colorize(output));
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn render_text(text: &str, mode: &str, options: &IndentOptions) -> Result<String, String> {
    match mode {
        "minify" => Ok(layout::minify(text)),
        "prettify" => Ok(layout::prettify(text)),
        "indent" => layout::indent_with(text, options).map_err(|e| e.to_string()),
        _ => Err(format!("Mode {} needs a tree, not text", mode)),
    }
}

fn parse_usize(name: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|e| format!("Invalid {} {:?}: {}", name, value, e))
}

fn sample() -> Sexp {
    list!(
        ".TypeDeclaration",
        list!(
            ".Attributes",
            list!(".Attribute", "Route", "api/[controller]"),
            list!(".Attribute", "ApiController")
        ),
        list!(
            ".Class",
            "TodoItemsController",
            list!(".ClassBase", "ControllerBase"),
            list!(
                ".ClassMemberDeclarations",
                list!(
                    ".ClassMemberDeclaration",
                    list!(".Attributes", list!(".Attribute", "HttpGet", "{id}")),
                    list!(".AllMemberModifiers", "Public", "Async"),
                    list!(
                        ".TypedMemberDeclaration",
                        list!(
                            ".Type",
                            "Task",
                            list!(
                                ".TypeArgumentList",
                                list!(".Type", "ActionResult", list!(".TypeArgumentList", list!(".Type", "TodoItem")))
                            )
                        ),
                        list!(
                            ".MethodDeclaration",
                            list!(".MethodMemberName", "GetTodoItem"),
                            list!(".FormalParameterList", list!(".ArgDeclaration", list!(".Type", "long"), "id")),
                            list!(".MethodBody")
                        )
                    )
                )
            )
        )
    )
}
