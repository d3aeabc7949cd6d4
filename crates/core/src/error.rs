// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse errors for duration expressions.

use crate::span::{context_snippet, diagnostic_context, Span};
use std::fmt;
use thiserror::Error;

/// What the scanner saw where the grammar was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A character, quoted in messages.
    Char(char),
    /// A code unit that is not a scalar value on its own (e.g. a lone UTF-16
    /// surrogate).
    CodeUnit(u32),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "{:?}", c),
            Found::CodeUnit(u) => write!(f, "code unit {:#06x}", u),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Errors from parsing a duration expression.
///
/// Parsing fails fast: the first violation is reported and no partial total
/// is returned.
///
/// # Examples
///
/// ```
/// use todur_core::{parse, ParseError, Unit};
///
/// let err = parse("12z", Unit::Seconds).unwrap_err();
/// assert!(matches!(err, ParseError::Malformed { .. }));
/// assert_eq!(err.span().start, 2);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match `([+-]?[0-9]+(ns|us|ms|s|m|h))*`.
    #[error("malformed duration: expected {expected}, found {found} at position {}", span.start)]
    Malformed {
        /// Description of what the grammar required here.
        expected: &'static str,
        /// What was there instead.
        found: Found,
        /// Location of the offending code unit; empty at end of input.
        span: Span,
    },

    /// A component, or the running total, does not fit in an `i64` tick
    /// count at the requested resolution.
    #[error("duration overflow in component at position {}", span.start)]
    Overflow {
        /// The whole component (sign, digits and unit) that overflowed.
        span: Span,
    },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Malformed { span, .. } | ParseError::Overflow { span } => *span,
        }
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// `input` should be the `&str` that was parsed; spans from wide input
    /// count `u16` units and will not line up.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// Generate a rustc-style diagnostic with a column and carets.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}
