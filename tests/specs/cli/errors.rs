//! CLI error handling specs
//!
//! Verify messages and exit codes for malformed expressions and arguments.

use crate::prelude::*;

#[test]
fn malformed_expression_shows_snippet() {
    cli()
        .args(&["12z"])
        .fails()
        .code(1)
        .stderr_eq(
            "Error: \"12z\": malformed duration: expected unit (ns, us, ms, s, m, h), found 'z' at position 2\n12z\n  ^\n",
        );
}

#[test]
fn results_before_the_failure_are_kept() {
    cli()
        .args(&["-r", "s", "1m", "invalid", "1h"])
        .fails()
        .stdout_eq("60s\n")
        .stderr_has("found 'i' at position 0");
}

#[test]
fn whitespace_is_malformed() {
    cli()
        .args(&["1h 30m"])
        .fails()
        .stderr_has("expected digit, found ' ' at position 2");
}

#[test]
fn missing_second_letter() {
    cli()
        .args(&["5n"])
        .fails()
        .stderr_has("expected 's', found end of input");
}

#[test]
fn overflow_is_reported() {
    cli()
        .args(&["9999999999999h"])
        .fails()
        .code(1)
        .stderr_has("duration overflow in component at position 0");
}

#[test]
fn unknown_resolution_is_usage_error() {
    cli()
        .args(&["-r", "fortnight", "1s"])
        .fails()
        .code(2)
        .stderr_has("unknown duration unit: fortnight");
}

#[test]
fn unknown_output_format_is_usage_error() {
    cli().args(&["-o", "yaml", "1s"]).fails().code(2);
}
