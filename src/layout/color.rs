//! Terminal colouring of S-exp text.

use colored::{Color, Colorize};


// Rotated through by nesting depth so that matching parens share a colour.
const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::White,
    Color::Yellow,
    Color::Red,
    Color::Magenta,
];

/// Paints parens by nesting depth, leaving everything else untouched.
///
/// Honours colored's global switch (CLICOLOR, NO_COLOR, set_override), in
/// which case the text is returned as-is. Stray ')'s are painted at depth 0.
pub fn colorize<S: AsRef<str>>(text: S) -> String {
    let text = text.as_ref();
    let mut s = String::with_capacity(text.len());
    let mut depth: usize = 0;
    for c in text.chars() {
        match c {
            '(' => {
                s.push_str(&paint("(", depth));
                depth += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                s.push_str(&paint(")", depth));
            }
            _ => s.push(c),
        }
    }
    s
}

fn paint(paren: &str, depth: usize) -> String {
    paren.color(PALETTE[depth % PALETTE.len()]).to_string()
}
