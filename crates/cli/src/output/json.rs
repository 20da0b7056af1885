// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::classify::Verdict;
use crate::schema::SchemaOutcome;

/// Top-level JSON document for one check run.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a, T: Serialize> {
    pub check: &'static str,
    pub timestamp: String,
    pub passed: bool,
    pub file: &'a Path,
    pub log: &'a Path,
    pub result: &'a T,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the change-check verdict.
    pub fn write_verdict(
        &mut self,
        file: &Path,
        verdict: &Verdict,
        log: &Path,
    ) -> std::io::Result<()> {
        self.write(&CheckReport {
            check: "changes",
            timestamp: timestamp(),
            passed: verdict.passed(),
            file,
            log,
            result: verdict,
        })
    }

    /// Write the schema-check outcome.
    pub fn write_schema(
        &mut self,
        file: &Path,
        outcome: &SchemaOutcome,
        log: &Path,
    ) -> std::io::Result<()> {
        self.write(&CheckReport {
            check: "schema",
            timestamp: timestamp(),
            passed: outcome.passed(),
            file,
            log,
            result: outcome,
        })
    }

    fn write<T: Serialize>(&mut self, report: &CheckReport<'_, T>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
