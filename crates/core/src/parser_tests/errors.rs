// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rejected expressions and where the error points.

use super::assert_malformed;
use crate::{parse, Found, ParseError, Span, Unit};

const UNIT: &str = "unit (ns, us, ms, s, m, h)";

#[test]
fn empty_is_not_an_error() {
    assert!(parse("", Unit::Seconds).is_ok());
}

#[test]
fn invalid_word() {
    assert_malformed("invalid", "digit", Found::Char('i'), Span::new(0, 1));
}

#[test]
fn unknown_unit() {
    assert_malformed("12z", UNIT, Found::Char('z'), Span::new(2, 3));
}

// ============================================================================
// Missing Digits
// ============================================================================

#[yare::parameterized(
    bare_unit        = { "s",     Found::Char('s'),  Span::new(0, 1) },
    sign_then_unit   = { "-s",    Found::Char('s'),  Span::new(1, 2) },
    double_sign      = { "--1s",  Found::Char('-'),  Span::new(1, 2) },
    trailing_sign    = { "1s-",   Found::EndOfInput, Span::empty(3) },
    trailing_plus    = { "1s+",   Found::EndOfInput, Span::empty(3) },
    second_component = { "1hx",   Found::Char('x'),  Span::new(2, 3) },
)]
fn missing_digits(input: &str, found: Found, span: Span) {
    assert_malformed(input, "digit", found, span);
}

// ============================================================================
// Bad Units
// ============================================================================

#[yare::parameterized(
    trailing_digits   = { "12",    Found::EndOfInput, Span::empty(2) },
    after_component   = { "1h30",  Found::EndOfInput, Span::empty(4) },
    uppercase_hour    = { "1H",    Found::Char('H'),  Span::new(1, 2) },
    uppercase_millis  = { "1MS",   Found::Char('M'),  Span::new(1, 2) },
    day               = { "1d",    Found::Char('d'),  Span::new(1, 2) },
    decimal_point     = { "1.5s",  Found::Char('.'),  Span::new(1, 2) },
    space_before_unit = { "1 s",   Found::Char(' '),  Span::new(1, 2) },
)]
fn bad_unit(input: &str, found: Found, span: Span) {
    assert_malformed(input, UNIT, found, span);
}

#[yare::parameterized(
    lone_n        = { "1n",   Found::EndOfInput, Span::empty(2) },
    lone_u        = { "1u",   Found::EndOfInput, Span::empty(2) },
    n_then_x      = { "1nx",  Found::Char('x'),  Span::new(2, 3) },
    u_then_digit  = { "5u5s", Found::Char('5'),  Span::new(2, 3) },
    n_uppercase_s = { "1nS",  Found::Char('S'),  Span::new(2, 3) },
)]
fn two_letter_unit_needs_s(input: &str, found: Found, span: Span) {
    assert_malformed(input, "'s'", found, span);
}

#[test]
fn whitespace_between_components() {
    assert_malformed("1h 30m", "digit", Found::Char(' '), Span::new(2, 3));
}

#[test]
fn leading_whitespace() {
    assert_malformed(" 1s", "digit", Found::Char(' '), Span::new(0, 1));
}

// ============================================================================
// Non-ASCII
// ============================================================================

#[test]
fn non_ascii_unit_reports_whole_char() {
    // U+00B5 MICRO SIGN is two bytes in UTF-8
    assert_malformed("5µs", UNIT, Found::Char('µ'), Span::new(1, 3));
}

// ============================================================================
// Messages & Diagnostics
// ============================================================================

#[test]
fn message_names_expected_found_and_position() {
    let err = parse("12z", Unit::Seconds).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed duration: expected unit (ns, us, ms, s, m, h), found 'z' at position 2"
    );
}

#[test]
fn message_at_end_of_input() {
    let err = parse("1n", Unit::Seconds).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed duration: expected 's', found end of input at position 2"
    );
}

#[test]
fn context_points_at_offending_char() {
    let err = parse("1h30x", Unit::Seconds).unwrap_err();
    assert_eq!(err.context("1h30x", 10), "1h30x\n    ^");
}

#[test]
fn diagnostic_includes_message() {
    let err = parse("1h30x", Unit::Seconds).unwrap_err();
    let diag = err.diagnostic("1h30x");
    assert!(diag.starts_with("error: malformed duration"), "{diag}");
    assert!(diag.contains("--> column 5"), "{diag}");
    assert!(diag.ends_with("   |     ^"), "{diag}");
}

#[test]
fn first_violation_wins() {
    let err = parse("1x2y", Unit::Seconds).unwrap_err();
    assert_eq!(err.span(), Span::new(1, 2));
    assert!(matches!(err, ParseError::Malformed { .. }));
}
