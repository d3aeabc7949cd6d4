//! Configuration specs
//!
//! Verify TODUR_RESOLUTION and RUST_LOG handling.

use crate::prelude::*;

#[test]
fn resolution_from_env() {
    cli()
        .env("TODUR_RESOLUTION", "ms")
        .args(&["2s"])
        .passes()
        .stdout_eq("2000ms\n");
}

#[test]
fn flag_overrides_env() {
    cli()
        .env("TODUR_RESOLUTION", "ms")
        .args(&["-r", "s", "2s"])
        .passes()
        .stdout_eq("2s\n");
}

#[test]
fn invalid_env_resolution_fails() {
    cli()
        .env("TODUR_RESOLUTION", "weeks")
        .args(&["2s"])
        .fails()
        .code(1)
        .stderr_has("invalid TODUR_RESOLUTION: unknown duration unit: weeks");
}

#[test]
fn quiet_by_default() {
    cli().args(&["12z"]).fails().stderr_lacks("DEBUG");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .env("RUST_LOG", "debug")
        .args(&["12z"])
        .fails()
        .stderr_has("rejected duration expression");
}
