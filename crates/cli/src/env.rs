// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use thiserror::Error;
use todur_core::{Unit, UnitParseError};

pub const RESOLUTION_VAR: &str = "TODUR_RESOLUTION";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    InvalidResolution {
        var: &'static str,
        source: UnitParseError,
    },
}

/// Default target resolution from `TODUR_RESOLUTION`, if set and non-empty.
pub fn resolution() -> Result<Option<Unit>, ConfigError> {
    parse_resolution(std::env::var(RESOLUTION_VAR).ok())
}

fn parse_resolution(raw: Option<String>) -> Result<Option<Unit>, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|source| ConfigError::InvalidResolution {
                var: RESOLUTION_VAR,
                source,
            }),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
