// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing output from the scanner.

use crate::{parse, Unit};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a TRACE-level subscriber and return what it logged.
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

#[test]
fn accepted_components_are_traced() {
    let (logs, result) = with_tracing(|| parse("1m30s", Unit::Seconds));
    assert_eq!(result.unwrap().count(), 90);
    assert!(logs.contains("accepted component"), "logs:\n{logs}");
    assert!(logs.contains("unit=m"), "logs:\n{logs}");
    assert!(logs.contains("ticks=30"), "logs:\n{logs}");
}

#[test]
fn rejection_is_logged_at_debug() {
    let (logs, result) = with_tracing(|| parse("12z", Unit::Seconds));
    assert!(result.is_err());
    assert!(logs.contains("DEBUG"), "logs:\n{logs}");
    assert!(logs.contains("rejected duration expression"), "logs:\n{logs}");
    assert!(logs.contains("resolution=s"), "logs:\n{logs}");
}
