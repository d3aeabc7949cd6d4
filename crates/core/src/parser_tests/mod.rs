// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{parse, Duration, Found, ParseError, Span, Unit};

mod errors;
mod grammar;
mod logging;
mod overflow;
mod properties;

// ---------------------------------------------------------------------------
// Shared test helpers
// ---------------------------------------------------------------------------

/// Parse at `resolution` and return the tick count, panicking on error.
fn count(input: &str, resolution: Unit) -> i64 {
    parse(input, resolution)
        .unwrap_or_else(|e| panic!("{input:?} should parse: {e}"))
        .count()
}

/// Parse and expect a malformed-input error with the given details.
fn assert_malformed(input: &str, expected: &str, found: Found, span: Span) {
    match parse(input, Unit::Nanos) {
        Err(ParseError::Malformed {
            expected: e,
            found: f,
            span: s,
        }) => {
            assert_eq!(e, expected, "expected-description for {input:?}");
            assert_eq!(f, found, "found for {input:?}");
            assert_eq!(s, span, "span for {input:?}");
        }
        other => panic!("{input:?} should be malformed, got {other:?}"),
    }
}

#[test]
fn result_carries_requested_resolution() {
    assert_eq!(
        parse("90s", Unit::Minutes).unwrap(),
        Duration::new(1, Unit::Minutes)
    );
}
