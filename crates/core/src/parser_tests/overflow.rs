// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counts that do not fit an `i64` fail instead of wrapping.

use super::count;
use crate::{parse, ParseError, Span, Unit};

#[test]
fn i64_bounds_are_accepted() {
    assert_eq!(count("9223372036854775807ns", Unit::Nanos), i64::MAX);
    assert_eq!(count("-9223372036854775808ns", Unit::Nanos), i64::MIN);
}

#[test]
fn magnitude_past_i64_max() {
    let err = parse("9223372036854775808ns", Unit::Nanos).unwrap_err();
    assert_eq!(err, ParseError::Overflow { span: Span::new(0, 21) });
}

#[test]
fn magnitude_past_u64_max() {
    let input = "99999999999999999999999s";
    let err = parse(input, Unit::Seconds).unwrap_err();
    assert_eq!(
        err,
        ParseError::Overflow {
            span: Span::new(0, input.len())
        }
    );
}

#[test]
fn conversion_overflow_spans_component() {
    // 3e6 hours is more nanoseconds than i64 holds
    let err = parse("1s3000000h", Unit::Nanos).unwrap_err();
    assert_eq!(err, ParseError::Overflow { span: Span::new(2, 10) });
    assert_eq!(count("3000000h", Unit::Hours), 3_000_000);
}

#[test]
fn accumulator_overflow() {
    let err = parse("9223372036854775807ns1ns", Unit::Nanos).unwrap_err();
    assert_eq!(err, ParseError::Overflow { span: Span::new(21, 24) });
}

#[test]
fn coarse_resolution_avoids_overflow() {
    // the same magnitude is fine when it only needs dividing
    assert_eq!(count("9223372036854775807ns", Unit::Hours), 2_562_047);
}

#[test]
fn malformed_takes_precedence_over_overflow() {
    let err = parse("99999999999999999999999x", Unit::Seconds).unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn overflow_message() {
    let err = parse("1s3000000h", Unit::Nanos).unwrap_err();
    assert_eq!(
        err.to_string(),
        "duration overflow in component at position 2"
    );
}
