// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! todur - parse compact duration expressions

mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use thiserror::Error;
use todur_core::{ParseError, Unit};

#[derive(Parser, Debug)]
#[command(
    name = "todur",
    version,
    about = "Convert duration expressions like 1h33m7s into a tick count"
)]
struct Cli {
    /// Target resolution (ns, us, ms, s, m, h) [env: TODUR_RESOLUTION] [default: ns]
    #[arg(short = 'r', long = "resolution")]
    resolution: Option<Unit>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Expressions to parse; read one per line from stdin when omitted
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    exprs: Vec<String>,
}

/// An expression that failed to parse, with the text it came from.
#[derive(Debug, Error)]
#[error("{input:?}: {source}")]
struct ExpressionError {
    input: String,
    source: ParseError,
}

impl ExpressionError {
    fn snippet(&self) -> String {
        self.source.context(&self.input, 20)
    }
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// A parse failure additionally gets a snippet with carets under the
/// offending character.
fn format_error(err: &anyhow::Error) -> String {
    let mut buf = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| buf.contains(&cause.to_string()));
    if !chain_redundant {
        for (i, cause) in err.chain().skip(1).enumerate() {
            buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
        }
    }

    if let Some(expr) = err.downcast_ref::<ExpressionError>() {
        buf.push('\n');
        buf.push_str(&expr.snippet());
    }
    buf
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let resolution = resolve_resolution(cli.resolution, env::resolution()?);
    tracing::debug!(%resolution, format = ?cli.output, "resolved settings");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.exprs.is_empty() {
        for line in std::io::stdin().lock().lines() {
            emit(&mut out, &line?, resolution, cli.output)?;
        }
    } else {
        for expr in &cli.exprs {
            emit(&mut out, expr, resolution, cli.output)?;
        }
    }
    Ok(())
}

/// Flag beats environment beats nanoseconds.
fn resolve_resolution(flag: Option<Unit>, env: Option<Unit>) -> Unit {
    flag.or(env).unwrap_or(Unit::Nanos)
}

fn emit(out: &mut impl Write, input: &str, resolution: Unit, format: OutputFormat) -> Result<()> {
    let duration = todur_core::parse(input, resolution).map_err(|source| ExpressionError {
        input: input.to_string(),
        source,
    })?;
    writeln!(out, "{}", output::render(input, duration, format)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
