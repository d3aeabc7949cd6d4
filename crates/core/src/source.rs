// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input adapters over the scanner.
//!
//! The scanner only needs to ask each element of its input whether it is an
//! ASCII byte, so any sequence of [`TextUnit`]s can be parsed. The functions
//! here adapt the common text representations onto [`parse_units`].

use crate::duration::Duration;
use crate::error::{Found, ParseError};
use crate::parser::parse_units;
use crate::span::Span;
use crate::unit::Unit;

/// One element of an input sequence.
pub trait TextUnit: Copy {
    /// The element as an ASCII byte, or `None` if it is outside ASCII.
    fn ascii(self) -> Option<u8>;

    /// How this element is reported in an error.
    fn found(self) -> Found;
}

impl TextUnit for u8 {
    fn ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn found(self) -> Found {
        if self.is_ascii() {
            Found::Char(char::from(self))
        } else {
            Found::CodeUnit(u32::from(self))
        }
    }
}

impl TextUnit for u16 {
    fn ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn found(self) -> Found {
        u32::from(self).found()
    }
}

impl TextUnit for u32 {
    fn ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn found(self) -> Found {
        char::from_u32(self).map_or(Found::CodeUnit(self), Found::Char)
    }
}

impl TextUnit for char {
    fn ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn found(self) -> Found {
        Found::Char(self)
    }
}

/// Parse a duration expression into a count of `resolution` ticks.
///
/// ```
/// use todur_core::{parse, Unit};
///
/// let d = parse("1h33m7s", Unit::Seconds)?;
/// assert_eq!(d.count(), 5587);
/// # Ok::<(), todur_core::ParseError>(())
/// ```
///
/// Error spans are byte offsets into `text`.
pub fn parse(text: &str, resolution: Unit) -> Result<Duration, ParseError> {
    parse_units(text.bytes(), resolution).map_err(|e| widen_to_char(e, text))
}

/// Parse UTF-16 text. Error spans count `u16` units.
pub fn parse_wide(text: &[u16], resolution: Unit) -> Result<Duration, ParseError> {
    parse_units(text.iter().copied(), resolution)
}

/// Parse a sequence of `char`s. Error spans count chars.
pub fn parse_chars<I>(chars: I, resolution: Unit) -> Result<Duration, ParseError>
where
    I: IntoIterator<Item = char>,
{
    parse_units(chars, resolution)
}

// Scanning bytes reports a multi-byte char by its lead byte; swap in the
// whole char so messages and spans cover it.
fn widen_to_char(err: ParseError, text: &str) -> ParseError {
    match err {
        ParseError::Malformed {
            expected,
            found: Found::CodeUnit(_),
            span,
        } => match text.get(span.start..).and_then(|rest| rest.chars().next()) {
            Some(c) => ParseError::Malformed {
                expected,
                found: Found::Char(c),
                span: Span::new(span.start, span.start + c.len_utf8()),
            },
            None => err,
        },
        other => other,
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
