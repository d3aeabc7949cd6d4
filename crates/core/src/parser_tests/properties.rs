// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests over generated expressions.

use crate::{parse, Unit};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.to_vec())
}

/// A component as (text, exact nanoseconds). Magnitudes stay small enough
/// that eight hour components still fit in an `i64` of nanoseconds.
fn component() -> impl Strategy<Value = (String, i64)> {
    (prop::option::of(prop::bool::ANY), 0i64..100_000, unit()).prop_map(
        |(sign, magnitude, unit)| {
            let (prefix, signed) = match sign {
                Some(true) => ("-", -magnitude),
                Some(false) => ("+", magnitude),
                None => ("", magnitude),
            };
            let text = format!("{}{}{}", prefix, magnitude, unit.suffix());
            (text, signed * unit.nanos())
        },
    )
}

proptest! {
    #[test]
    fn concatenation_is_additive(parts in prop::collection::vec(component(), 0..8)) {
        let input: String = parts.iter().map(|(text, _)| text.as_str()).collect();
        let expected: i64 = parts.iter().map(|(_, nanos)| nanos).sum();
        prop_assert_eq!(parse(&input, Unit::Nanos).unwrap().count(), expected);
    }

    #[test]
    fn concatenation_matches_parts_at_any_resolution(
        parts in prop::collection::vec(component(), 0..8),
        resolution in unit(),
    ) {
        let input: String = parts.iter().map(|(text, _)| text.as_str()).collect();
        let sum: i64 = parts
            .iter()
            .map(|(text, _)| parse(text, resolution).unwrap().count())
            .sum();
        prop_assert_eq!(parse(&input, resolution).unwrap().count(), sum);
    }

    #[test]
    fn coarse_result_is_truncated_fine_result(
        (text, _) in component(),
        a in unit(),
        b in unit(),
    ) {
        let (fine, coarse) = if a <= b { (a, b) } else { (b, a) };
        let at_fine = parse(&text, fine).unwrap().count();
        let at_coarse = parse(&text, coarse).unwrap().count();
        prop_assert_eq!(at_coarse, at_fine / (coarse.nanos() / fine.nanos()));
    }

    #[test]
    fn negation_flips_sign(magnitude in 0i64..1_000_000, u in unit()) {
        let pos = parse(&format!("{}{}", magnitude, u.suffix()), Unit::Nanos).unwrap();
        let neg = parse(&format!("-{}{}", magnitude, u.suffix()), Unit::Nanos).unwrap();
        prop_assert_eq!(neg.count(), -pos.count());
    }

    #[test]
    fn parsing_never_panics(input in "[ -~]{0,40}") {
        let _ = parse(&input, Unit::Nanos);
    }

    #[test]
    fn error_spans_stay_in_bounds(input in "[0-9a-z+-]{0,20}") {
        if let Err(err) = parse(&input, Unit::Millis) {
            let span = err.span();
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end <= input.len());
        }
    }
}
