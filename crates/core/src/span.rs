// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for duration expressions.

use serde::{Deserialize, Serialize};

/// A range of code units in the parsed input.
///
/// For `&str` input the offsets are bytes, so a span can slice the source
/// directly. For wide or `char` input they count elements of that sequence.
///
/// # Examples
///
/// ```
/// use todur_core::Span;
///
/// let source = "1h30x";
/// let span = Span::new(4, 5);
/// assert_eq!(span.slice(source), "x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position, used for errors at end of input.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the input around `span` with carets underneath.
///
/// At most `context_chars` characters are kept on either side of the span
/// start.
///
/// ```text
/// 1h30x5s
///     ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let pos = floor_char_boundary(input, span.start);

    let start = input[..pos]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(pos);

    let end = input[pos..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| pos + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    let caret_pos = input[start..pos].chars().count();
    let caret_len = caret_len(input, span);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Render a rustc-style diagnostic for a single-line expression.
///
/// ```text
/// error: malformed duration: expected digit, found 'x' at position 4
///   --> column 5
///    |
///    | 1h30x5s
///    |     ^
/// ```
pub fn diagnostic_context(input: &str, span: Span, message: &str) -> String {
    let pos = floor_char_boundary(input, span.start);
    let col = input[..pos].chars().count();
    format!(
        "error: {}\n  --> column {}\n   |\n   | {}\n   | {}{}",
        message,
        col + 1,
        input,
        " ".repeat(col),
        "^".repeat(caret_len(input, span))
    )
}

fn caret_len(input: &str, span: Span) -> usize {
    match span.slice(input) {
        "" => span.len().max(1),
        text => text.chars().count(),
    }
}

fn floor_char_boundary(input: &str, pos: usize) -> usize {
    let pos = pos.min(input.len());
    (0..=pos)
        .rev()
        .find(|&i| input.is_char_boundary(i))
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
