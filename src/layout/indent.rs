//! Breaking of long S-exp text across depth-indented lines.
//!
//! This is a single greedy pass rather than a layout solver. Sub-expressions
//! are considered in the order their ')' appears (innermost first), and each
//! one is judged only by its own length against a running line estimate;
//! siblings already placed on the same line are not accounted for. Callers
//! may depend on exactly where this breaks, so it should not be swapped for
//! a "better" fit algorithm.

use derivative::Derivative;
use derive_getters::Getters;
use log::{debug, trace};

use super::minify::prettify;
use super::LayoutError;


#[derive(Clone, Debug, Derivative, PartialEq)]
#[derivative(Default)]
pub struct IndentOptions {
    /// Columns of indentation per nesting level.
    #[derivative(Default(value = "4"))]
    pub width: usize,
    /// Line length past which sub-expressions move to their own line.
    #[derivative(Default(value = "80"))]
    pub cutoff: usize,
}

/// A parenthesized sub-expression: char offsets of its '(' and ')', and its
/// nesting depth (0 for the outermost list).
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Span {
    begin: usize,
    end: usize,
    depth: usize,
}

impl IndentOptions {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.begin + 1
    }
}


/// Lists every parenthesized sub-expression of text in the order its ')'
/// appears.
pub fn spans<S: AsRef<str>>(text: S) -> Result<Vec<Span>, LayoutError> {
    let mut opens: Vec<usize> = Vec::new();
    let mut found = Vec::new();
    for (i, c) in text.as_ref().chars().enumerate() {
        match c {
            '(' => opens.push(i),
            ')' => match opens.pop() {
                // Lists still open after the pop are exactly the enclosing
                // ones, so their count is this list's depth.
                Some(begin) => found.push(Span {
                    begin,
                    end: i,
                    depth: opens.len(),
                }),
                None => return malformed!(UnmatchedClose, i),
            },
            _ => {}
        }
    }

    if let Some(&begin) = opens.last() {
        return malformed!(UnmatchedOpen, begin);
    }
    Ok(found)
}

/// Fails if parens in text do not balance.
pub fn validate<S: AsRef<str>>(text: S) -> Result<(), LayoutError> {
    spans(text).map(|_| ())
}

/// Prettifies text and breaks it over lines of roughly cutoff columns,
/// indenting each broken sub-expression by width columns per depth.
pub fn indent<S: AsRef<str>>(text: S, width: usize, cutoff: usize) -> Result<String, LayoutError> {
    indent_with(text, &IndentOptions { width, cutoff })
}

pub fn indent_with<S: AsRef<str>>(text: S, options: &IndentOptions) -> Result<String, LayoutError> {
    let text = text.as_ref();
    validate(text)?;

    let pretty = prettify(text);
    if !pretty.contains('(') {
        return Ok(pretty);
    }

    let found = spans(&pretty)?;
    let span_count = found.len();
    let breaks = find_breaks(found, pretty.chars().count(), options);
    debug!(
        "Indent: {} sub-expressions, {} line breaks",
        span_count,
        breaks.len()
    );
    if breaks.is_empty() {
        return Ok(pretty);
    }

    Ok(emit(&pretty, &breaks, options.width))
}


// Returns the spans which start a new line, ordered by begin.
fn find_breaks(found: Vec<Span>, text_len: usize, options: &IndentOptions) -> Vec<Span> {
    let mut line_end = text_len;
    let mut breaks = Vec::new();
    for span in found {
        let expr_len = span.len();
        // The root never moves to a line of its own.
        if span.depth == 0 || line_end + expr_len < options.cutoff {
            continue;
        }

        trace!(
            "Indent: breaking before {} (depth {}, {} chars, line estimate {})",
            span.begin,
            span.depth,
            expr_len,
            line_end
        );
        line_end = span.depth * options.width + expr_len;
        breaks.push(span);
    }

    breaks.sort_by_key(|span| span.begin);
    breaks
}

fn emit(pretty: &str, breaks: &[Span], width: usize) -> String {
    let extra: usize = breaks.iter().map(|span| 1 + span.depth * width).sum();
    let mut s = String::with_capacity(pretty.len() + extra);
    let mut pending = breaks.iter().peekable();
    for (i, c) in pretty.chars().enumerate() {
        if let Some(span) = pending.next_if(|span| span.begin == i) {
            s.push('\n');
            s.extend(std::iter::repeat(' ').take(span.depth * width));
        }
        s.push(c);
    }
    s
}


#[cfg(test)]
#[path = "./indent_test.rs"]
mod indent_test;
