// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signed tick counts tagged with their resolution.

use crate::error::ParseError;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A signed count of ticks at a fixed resolution.
///
/// This is what parsing returns: `"1h33m7s"` at [`Unit::Seconds`] is
/// `Duration { count: 5587, resolution: Seconds }`. Equality is structural,
/// so `1s` and `1000ms` are different values until converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    count: i64,
    resolution: Unit,
}

impl Duration {
    pub const fn new(count: i64, resolution: Unit) -> Self {
        Self { count, resolution }
    }

    pub const fn zero(resolution: Unit) -> Self {
        Self::new(0, resolution)
    }

    /// Number of ticks.
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Length of one tick.
    pub const fn resolution(&self) -> Unit {
        self.resolution
    }

    pub const fn is_zero(&self) -> bool {
        self.count == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.count < 0
    }

    /// Re-express this duration in another resolution.
    ///
    /// Truncates toward zero when `to` is coarser; returns `None` if the
    /// count overflows when `to` is finer.
    pub fn convert(self, to: Unit) -> Option<Duration> {
        Unit::convert(self.count, self.resolution, to).map(|count| Duration::new(count, to))
    }

    /// Add `other` after converting it into this duration's resolution.
    pub fn checked_add(self, other: Duration) -> Option<Duration> {
        let other = other.convert(self.resolution)?;
        self.count
            .checked_add(other.count)
            .map(|count| Duration::new(count, self.resolution))
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    /// Parse at nanosecond resolution.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::source::parse(s, Unit::Nanos)
    }
}

/// Error converting into [`std::time::Duration`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("cannot represent negative duration ({count}{resolution})")]
    Negative { count: i64, resolution: Unit },

    #[error("duration overflows std::time::Duration")]
    Overflow,
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = ConversionError;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        let count = u64::try_from(d.count).map_err(|_| ConversionError::Negative {
            count: d.count,
            resolution: d.resolution,
        })?;
        let std = match d.resolution {
            Unit::Nanos => std::time::Duration::from_nanos(count),
            Unit::Micros => std::time::Duration::from_micros(count),
            Unit::Millis => std::time::Duration::from_millis(count),
            Unit::Seconds => std::time::Duration::from_secs(count),
            Unit::Minutes => std::time::Duration::from_secs(
                count.checked_mul(60).ok_or(ConversionError::Overflow)?,
            ),
            Unit::Hours => std::time::Duration::from_secs(
                count.checked_mul(3600).ok_or(ConversionError::Overflow)?,
            ),
        };
        Ok(std)
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
