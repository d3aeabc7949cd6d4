// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use todur_core::{Duration, Unit};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One parsed expression, as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct Record<'a> {
    input: &'a str,
    count: i64,
    resolution: Unit,
}

/// Render a parsed expression as a single output line (no newline).
///
/// Text is the count followed by the resolution suffix (`5587s`); JSON is a
/// compact object with the original input.
pub fn render(input: &str, duration: Duration, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}{}", duration.count(), duration.resolution())),
        OutputFormat::Json => serde_json::to_string(&Record {
            input,
            count: duration.count(),
            resolution: duration.resolution(),
        }),
    }
}
