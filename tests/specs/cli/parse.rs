//! Parsing specs
//!
//! Verify results printed for valid expressions.

use crate::prelude::*;

#[test]
fn documented_example_in_seconds() {
    cli()
        .args(&["-r", "s", "1h33m7s"])
        .passes()
        .stdout_eq("5587s\n");
}

#[test]
fn defaults_to_nanoseconds() {
    cli().args(&["1us"]).passes().stdout_eq("1000ns\n");
}

#[test]
fn one_line_per_expression() {
    cli()
        .args(&["-r", "ms", "1s", "1m", "1ms", "1h-1h"])
        .passes()
        .stdout_eq("1000ms\n60000ms\n1ms\n0ms\n");
}

#[test]
fn negative_expression() {
    cli()
        .args(&["--resolution", "seconds", "-1s"])
        .passes()
        .stdout_eq("-1s\n");
}

#[test]
fn truncates_to_coarse_resolution() {
    cli()
        .args(&["-r", "m", "1h59s"])
        .passes()
        .stdout_eq("60m\n");
}

#[test]
fn reads_stdin_when_no_expressions() {
    cli()
        .args(&["-r", "s"])
        .stdin("1m\n\n2h\r\n")
        .passes()
        .stdout_eq("60s\n0s\n7200s\n");
}

#[test]
fn json_output() {
    let run = cli()
        .args(&["-o", "json", "-r", "ms", "1s", "250ms"])
        .passes();
    let lines: Vec<serde_json::Value> = run
        .stdout()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["input"], "1s");
    assert_eq!(lines[0]["count"], 1000);
    assert_eq!(lines[0]["resolution"], "ms");
    assert_eq!(lines[1]["count"], 250);
}
