// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tick units shared by component suffixes and target resolutions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed tick length, from nanoseconds up to hours.
///
/// The same six units name both the suffix of a parsed component (`5ms`) and
/// the resolution a caller wants the accumulated count expressed in. Units
/// order from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "ns")]
    Nanos,
    #[serde(rename = "us")]
    Micros,
    #[serde(rename = "ms")]
    Millis,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "m")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
}

impl Unit {
    /// Every unit, finest first.
    pub const ALL: [Unit; 6] = [
        Unit::Nanos,
        Unit::Micros,
        Unit::Millis,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
    ];

    /// Length of one tick in nanoseconds.
    pub const fn nanos(self) -> i64 {
        match self {
            Unit::Nanos => 1,
            Unit::Micros => 1_000,
            Unit::Millis => 1_000_000,
            Unit::Seconds => 1_000_000_000,
            Unit::Minutes => 60_000_000_000,
            Unit::Hours => 3_600_000_000_000,
        }
    }

    /// The suffix this unit is written with in a duration expression.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Nanos => "ns",
            Unit::Micros => "us",
            Unit::Millis => "ms",
            Unit::Seconds => "s",
            Unit::Minutes => "m",
            Unit::Hours => "h",
        }
    }

    /// Convert `count` ticks of `from` into ticks of `to`.
    ///
    /// Moving to a coarser unit divides and truncates toward zero, so
    /// `1999ms` becomes `1s` and `-1999ms` becomes `-1s`. Moving to a finer
    /// unit multiplies, returning `None` if the result overflows `i64`.
    pub fn convert(count: i64, from: Unit, to: Unit) -> Option<i64> {
        let (from_ns, to_ns) = (from.nanos(), to.nanos());
        if from_ns >= to_ns {
            count.checked_mul(from_ns / to_ns)
        } else {
            Some(count / (to_ns / from_ns))
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Error returned when a unit name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown duration unit: {0}")]
pub struct UnitParseError(pub String);

impl FromStr for Unit {
    type Err = UnitParseError;

    /// Accepts the expression suffixes plus the usual long spellings
    /// (`millis`, `second`, `minutes`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" | "nanos" | "nanosecond" | "nanoseconds" => Ok(Unit::Nanos),
            "us" | "micros" | "microsecond" | "microseconds" => Ok(Unit::Micros),
            "ms" | "millis" | "millisecond" | "milliseconds" => Ok(Unit::Millis),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Unit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(Unit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(Unit::Hours),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
