//! JSON-lines output.
//!
//! One object per audited URL: the `Report` itself on success, an
//! `AuditFailure` record otherwise. Suitable for piping to `jq`.

use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::AuditOutcome;

/// Failure record written in place of a report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AuditFailure<'a> {
    /// URL as submitted
    pub url: &'a str,
    /// What went wrong
    pub error: FailureDetail,
}

/// Error half of an `AuditFailure`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FailureDetail {
    /// `"retrieval"` or `"analysis"`
    pub kind: &'static str,
    /// Display form of the error
    pub message: String,
}

/// Serializes one outcome as a single JSON line (without the newline).
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn json_line(outcome: &AuditOutcome) -> serde_json::Result<String> {
    match &outcome.result {
        Ok(report) => serde_json::to_string(report),
        Err(e) => serde_json::to_string(&AuditFailure {
            url: &outcome.url,
            error: FailureDetail {
                kind: e.kind(),
                message: e.to_string(),
            },
        }),
    }
}

/// Writes every outcome as JSON lines, returning the number of lines written.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_json_lines_to<W: Write>(writer: W, outcomes: &[AuditOutcome]) -> Result<usize> {
    let mut writer = BufWriter::new(writer);
    for outcome in outcomes {
        let line = json_line(outcome)
            .with_context(|| format!("Failed to serialize result for {}", outcome.url))?;
        writeln!(writer, "{line}").context("Failed to write JSON line")?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(outcomes.len())
}

/// Writes every outcome as JSON lines to a file, truncating it first.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_json_lines(path: &Path, outcomes: &[AuditOutcome]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json_lines_to(file, outcomes)
}

/// Wrapper around a `Write` that ignores broken pipe errors (EPIPE).
///
/// Lets `page_audit ... | head` exit quietly.
pub struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl IgnoreBrokenPipe<io::Stdout> {
    /// Stdout, tolerant of a closed pipe.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}
