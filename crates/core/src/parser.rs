// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass scanner for `([+-]?[0-9]+(ns|us|ms|s|m|h))*`.

use crate::duration::Duration;
use crate::error::{Found, ParseError};
use crate::source::TextUnit;
use crate::span::Span;
use crate::unit::Unit;
use std::iter::Peekable;

/// One `[sign] digits unit` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Component {
    count: i64,
    unit: Unit,
    span: Span,
}

/// Parse any sequence of text units into a count of `resolution` ticks.
///
/// Each component is converted to `resolution` on its own, truncating toward
/// zero, and the results are summed. So `"1500ms1500ms"` at seconds is `2`,
/// not `3`. Empty input is a zero duration.
///
/// ```
/// use todur_core::{parse_units, Unit};
///
/// let wide: Vec<u16> = "1m30s".encode_utf16().collect();
/// assert_eq!(parse_units(wide, Unit::Seconds)?.count(), 90);
/// # Ok::<(), todur_core::ParseError>(())
/// ```
pub fn parse_units<I>(units: I, resolution: Unit) -> Result<Duration, ParseError>
where
    I: IntoIterator,
    I::Item: TextUnit,
{
    let mut scanner = Scanner::new(units.into_iter());
    scanner.total(resolution).inspect_err(|e| {
        tracing::debug!(error = %e, %resolution, "rejected duration expression");
    })
}

/// Cursor over the input with single-element lookahead.
struct Scanner<I: Iterator> {
    units: Peekable<I>,
    pos: usize,
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: TextUnit,
{
    fn new(units: I) -> Self {
        Self {
            units: units.peekable(),
            pos: 0,
        }
    }

    fn total(&mut self, resolution: Unit) -> Result<Duration, ParseError> {
        let mut total: i64 = 0;
        while self.peek().is_some() {
            let component = self.component()?;
            let overflow = || ParseError::Overflow {
                span: component.span,
            };
            let ticks =
                Unit::convert(component.count, component.unit, resolution).ok_or_else(overflow)?;
            total = total.checked_add(ticks).ok_or_else(overflow)?;
            tracing::trace!(
                count = component.count,
                unit = %component.unit,
                ticks,
                "accepted component"
            );
        }
        Ok(Duration::new(total, resolution))
    }

    fn component(&mut self) -> Result<Component, ParseError> {
        let start = self.pos;
        let negative = match self.peek_ascii() {
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            _ => false,
        };

        let magnitude = self.magnitude()?;
        let unit = self.unit()?;
        let span = Span::new(start, self.pos);

        let count = match magnitude {
            Some(m) if negative => 0i64.checked_sub_unsigned(m),
            Some(m) => i64::try_from(m).ok(),
            None => None,
        }
        .ok_or(ParseError::Overflow { span })?;

        Ok(Component { count, unit, span })
    }

    /// Read one or more digits. `Ok(None)` means the digits did not fit in a
    /// `u64`; the whole run is still consumed so the error covers it.
    fn magnitude(&mut self) -> Result<Option<u64>, ParseError> {
        let mut magnitude = Some(0u64);
        let mut digits = 0usize;
        while let Some(d) = self.peek_ascii().filter(u8::is_ascii_digit) {
            self.bump();
            digits += 1;
            magnitude = magnitude
                .and_then(|m| m.checked_mul(10))
                .and_then(|m| m.checked_add(u64::from(d - b'0')));
        }
        if digits == 0 {
            return Err(self.malformed("digit"));
        }
        Ok(magnitude)
    }

    fn unit(&mut self) -> Result<Unit, ParseError> {
        const EXPECTED: &str = "unit (ns, us, ms, s, m, h)";
        let unit = match self.peek_ascii() {
            Some(b'n') => {
                self.bump();
                self.expect_s()?;
                Unit::Nanos
            }
            Some(b'u') => {
                self.bump();
                self.expect_s()?;
                Unit::Micros
            }
            Some(b'm') => {
                self.bump();
                // `m` alone is minutes; whatever follows starts the next component
                if self.peek_ascii() == Some(b's') {
                    self.bump();
                    Unit::Millis
                } else {
                    Unit::Minutes
                }
            }
            Some(b's') => {
                self.bump();
                Unit::Seconds
            }
            Some(b'h') => {
                self.bump();
                Unit::Hours
            }
            _ => return Err(self.malformed(EXPECTED)),
        };
        Ok(unit)
    }

    fn expect_s(&mut self) -> Result<(), ParseError> {
        if self.peek_ascii() == Some(b's') {
            self.bump();
            Ok(())
        } else {
            Err(self.malformed("'s'"))
        }
    }

    fn malformed(&mut self, expected: &'static str) -> ParseError {
        let (found, span) = match self.peek() {
            Some(unit) => (unit.found(), Span::new(self.pos, self.pos + 1)),
            None => (Found::EndOfInput, Span::empty(self.pos)),
        };
        ParseError::Malformed {
            expected,
            found,
            span,
        }
    }

    fn peek(&mut self) -> Option<I::Item> {
        self.units.peek().copied()
    }

    fn peek_ascii(&mut self) -> Option<u8> {
        self.peek().and_then(TextUnit::ascii)
    }

    fn bump(&mut self) {
        if self.units.next().is_some() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
