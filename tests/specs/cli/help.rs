//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--resolution <RESOLUTION>")
        .stdout_has("--output <OUTPUT>")
        .stdout_has("[EXPR]...");
}

#[test]
fn version_prints_name() {
    cli().args(&["--version"]).passes().stdout_has("todur 0.1.0");
}
