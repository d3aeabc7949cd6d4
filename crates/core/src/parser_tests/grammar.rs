// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accepted expressions: units, signs, concatenation and the `m`/`ms` split.

use super::count;
use crate::Unit;

// ============================================================================
// Empty Input
// ============================================================================

#[test]
fn empty_input_is_zero_at_every_resolution() {
    for unit in Unit::ALL {
        let d = crate::parse("", unit).unwrap();
        assert!(d.is_zero());
        assert_eq!(d.resolution(), unit);
    }
}

// ============================================================================
// Single Components
// ============================================================================

#[yare::parameterized(
    nanoseconds  = { "1ns", Unit::Nanos,   1 },
    microseconds = { "1us", Unit::Micros,  1 },
    milliseconds = { "1ms", Unit::Millis,  1 },
    seconds      = { "1s",  Unit::Seconds, 1 },
    minutes      = { "1m",  Unit::Minutes, 1 },
    hours        = { "1h",  Unit::Hours,   1 },
)]
fn one_of_each_at_own_resolution(input: &str, resolution: Unit, expected: i64) {
    assert_eq!(count(input, resolution), expected);
}

#[yare::parameterized(
    second_in_millis  = { "1s",   Unit::Millis,  1_000 },
    second_in_nanos   = { "1s",   Unit::Nanos,   1_000_000_000 },
    minute_in_seconds = { "5m",   Unit::Seconds, 300 },
    hour_in_minutes   = { "2h",   Unit::Minutes, 120 },
    hour_in_micros    = { "1h",   Unit::Micros,  3_600_000_000 },
    micros_in_nanos   = { "42us", Unit::Nanos,   42_000 },
    zero_magnitude    = { "0h",   Unit::Nanos,   0 },
    leading_zeros     = { "007s", Unit::Seconds, 7 },
)]
fn scales_to_finer_resolution(input: &str, resolution: Unit, expected: i64) {
    assert_eq!(count(input, resolution), expected);
}

#[test]
fn every_unit_scales_by_its_ratio() {
    for unit in Unit::ALL {
        for target in Unit::ALL.into_iter().filter(|t| *t <= unit) {
            let input = format!("7{}", unit.suffix());
            let ratio = unit.nanos() / target.nanos();
            assert_eq!(count(&input, target), 7 * ratio, "{input} at {target}");
        }
    }
}

#[yare::parameterized(
    millis_to_seconds  = { "1999ms", Unit::Seconds, 1 },
    nanos_to_micros    = { "999ns",  Unit::Micros,  0 },
    seconds_to_minutes = { "119s",   Unit::Minutes, 1 },
    minutes_to_hours   = { "90m",    Unit::Hours,   1 },
    negative_toward_0  = { "-1999ms", Unit::Seconds, -1 },
)]
fn truncates_to_coarser_resolution(input: &str, resolution: Unit, expected: i64) {
    assert_eq!(count(input, resolution), expected);
}

// ============================================================================
// Concatenation
// ============================================================================

#[test]
fn documented_example() {
    assert_eq!(count("1h33m7s", Unit::Seconds), 5587);
}

#[test]
fn combination_equals_sum_of_parts() {
    let parts = ["1h", "1m", "1s", "1ms", "1us", "1ns"];
    let sum: i64 = parts.iter().map(|p| count(p, Unit::Nanos)).sum();
    assert_eq!(count("1h1m1s1ms1us1ns", Unit::Nanos), sum);
    assert_eq!(sum, 3_661_001_001_001);
}

#[test]
fn order_does_not_matter() {
    assert_eq!(
        count("1ns1us1ms1s1m1h", Unit::Nanos),
        count("1h1m1s1ms1us1ns", Unit::Nanos)
    );
}

#[test]
fn repeated_units_accumulate() {
    assert_eq!(count("1h1h", Unit::Hours), 2);
    assert_eq!(count("10s10s10s", Unit::Seconds), 30);
}

#[test]
fn truncation_is_per_component() {
    assert_eq!(count("1500ms1500ms", Unit::Seconds), 2);
    assert_eq!(count("3000ms", Unit::Seconds), 3);
}

// ============================================================================
// Signs
// ============================================================================

#[yare::parameterized(
    cancel_out        = { "1h-1h",  Unit::Hours,   0 },
    cancel_out_nanos  = { "1h-1h",  Unit::Nanos,   0 },
    negative_second   = { "-1s",    Unit::Seconds, -1 },
    explicit_plus     = { "+1s",    Unit::Seconds, 1 },
    mixed_signs       = { "1m-30s", Unit::Seconds, 30 },
    all_negative      = { "-1m-1s", Unit::Seconds, -61 },
    plus_after_minute = { "1m+1s",  Unit::Seconds, 61 },
    negative_zero     = { "-0s",    Unit::Seconds, 0 },
)]
fn signs(input: &str, resolution: Unit, expected: i64) {
    assert_eq!(count(input, resolution), expected);
}

// ============================================================================
// Minute / Millisecond Disambiguation
// ============================================================================

#[test]
fn minute_and_millisecond_are_distinct() {
    assert_eq!(count("1m", Unit::Millis), 60_000);
    assert_eq!(count("1ms", Unit::Millis), 1);
}

#[yare::parameterized(
    minute_then_seconds = { "1m1s",   Unit::Millis, 61_000 },
    minute_then_millis  = { "1m1ms",  Unit::Millis, 60_001 },
    millis_then_minute  = { "1ms1m",  Unit::Millis, 60_001 },
    minute_then_hour    = { "2m1h",   Unit::Millis, 3_720_000 },
    minute_then_sign    = { "2m-1m",  Unit::Millis, 60_000 },
    minute_at_end       = { "1h30m",  Unit::Minutes, 90 },
)]
fn minute_lookahead_starts_next_component(input: &str, resolution: Unit, expected: i64) {
    assert_eq!(count(input, resolution), expected);
}
