use lazy_static::lazy_static;
use regex::Regex;


fn is_paren(c: char) -> bool {
    c == '(' || c == ')'
}

fn is_atom_char(c: char) -> bool {
    !is_paren(c) && c != ' '
}

/// Canonicalizes whitespace.
///
/// Whitespace between two atoms collapses to a single space; whitespace
/// next to a paren is dropped. Text without any '(' is a lone atom and is
/// only trimmed.
pub fn minify<S: AsRef<str>>(text: S) -> String {
    lazy_static! {
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }

    let trimmed = text.as_ref().trim();
    if !trimmed.contains('(') {
        return trimmed.to_string();
    }

    let collapsed = WHITESPACE.replace_all(trimmed, " ");
    let mut s = String::with_capacity(collapsed.len());
    let mut seen_space = false;
    let mut last: Option<char> = None;
    for c in collapsed.chars() {
        if c == ' ' {
            seen_space = true;
            continue;
        }
        if seen_space && !is_paren(c) && !last.map_or(true, is_paren) {
            s.push(' ');
        }
        s.push(c);
        last = Some(c);
        seen_space = false;
    }
    s
}

/// Minifies, then separates every pair of adjacent tokens by one space.
///
/// No space follows '(' or precedes ')', so `(A(B C)D)` becomes
/// `(A (B C) D)`.
pub fn prettify<S: AsRef<str>>(text: S) -> String {
    let minified = minify(text);
    if !minified.contains('(') {
        return minified;
    }

    let chars = minified.chars().collect::<Vec<_>>();
    let mut s = String::with_capacity(minified.len() * 2);
    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        if is_atom_char(c) {
            if prev == Some(')') {
                s.push(' ');
            }
            s.push(c);
            if next == Some('(') {
                s.push(' ');
            }
        } else {
            if c == '(' && prev == Some(')') {
                s.push(' ');
            }
            s.push(c);
        }
    }
    s
}
