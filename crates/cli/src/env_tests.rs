// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    unset      = { None,              None },
    empty      = { Some(""),          None },
    blank      = { Some("  "),        None },
    suffix     = { Some("ms"),        Some(Unit::Millis) },
    long_name  = { Some("seconds"),   Some(Unit::Seconds) },
    padded     = { Some(" h "),       Some(Unit::Hours) },
)]
fn parses(raw: Option<&str>, expected: Option<Unit>) {
    let got = parse_resolution(raw.map(String::from)).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn invalid_value_names_the_variable() {
    let err = parse_resolution(Some("fortnight".into())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid TODUR_RESOLUTION: unknown duration unit: fortnight"
    );
}
