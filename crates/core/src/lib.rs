// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! todur-core: parse compact duration expressions like `1h33m7s`.
//!
//! An expression is zero or more components, each an optional sign, one or
//! more decimal digits and a unit suffix, with no separators:
//!
//! ```text
//! expression = component*
//! component  = [+-]? [0-9]+ unit
//! unit       = "ns" | "us" | "ms" | "s" | "m" | "h"
//! ```
//!
//! The caller picks the [`Unit`] the result is counted in. Components are
//! converted one at a time with truncating integer conversion and summed.
//!
//! # Quick Start
//!
//! ```
//! use todur_core::{parse, Unit};
//!
//! assert_eq!(parse("1h33m7s", Unit::Seconds)?.count(), 5587);
//! assert_eq!(parse("1s", Unit::Millis)?.count(), 1000);
//! assert_eq!(parse("1h-1h", Unit::Nanos)?.count(), 0);
//! assert_eq!(parse("", Unit::Hours)?.count(), 0);
//! assert!(parse("12z", Unit::Seconds).is_err());
//! # Ok::<(), todur_core::ParseError>(())
//! ```
//!
//! # Input
//!
//! [`parse`] takes `&str`. [`parse_wide`] takes UTF-16, [`parse_chars`] any
//! `char` iterator, and [`parse_units`] any sequence of [`TextUnit`]s.

mod duration;
mod error;
mod parser;
mod source;
pub mod span;
mod unit;

pub use duration::{ConversionError, Duration};
pub use error::{Found, ParseError};
pub use parser::parse_units;
pub use source::{parse, parse_chars, parse_wide, TextUnit};
pub use span::{context_snippet, diagnostic_context, Span};
pub use unit::{Unit, UnitParseError};
