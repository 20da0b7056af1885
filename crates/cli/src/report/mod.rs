// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown report artifacts.
//!
//! Renders check outcomes into the log artifact consumed by CI (posted as a
//! pull request comment). Rendering is pure; writing the artifact and
//! reading the raw diff are the only I/O here.

mod markdown;

use std::path::Path;

use crate::classify::Verdict;
use crate::error::{Error, ExitCode, Result};
use crate::schema::SchemaOutcome;

pub use markdown::{MarkdownFormatter, format_value};

/// Default report artifact path.
pub const DEFAULT_LOG_FILE: &str = "log.md";

/// Default raw unified diff artifact path.
pub const DEFAULT_DIFF_FILE: &str = "diff_output.txt";

/// A rendered report and the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub markdown: String,
    pub exit_code: ExitCode,
}

impl Report {
    /// Write the markdown to the log artifact.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        tracing::debug!("writing report to {}", path.display());
        std::fs::write(path, &self.markdown).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Render the change-check report.
pub fn changes_report(verdict: &Verdict, raw_diff: &str, section: &str) -> Report {
    Report {
        markdown: MarkdownFormatter::new(section).format_verdict(verdict, raw_diff),
        exit_code: verdict.exit_code(),
    }
}

/// Render the schema-check report.
pub fn schema_report(outcome: &SchemaOutcome) -> Report {
    Report {
        markdown: MarkdownFormatter::default().format_schema(outcome),
        exit_code: outcome.exit_code(),
    }
}

/// Read the raw unified diff artifact.
///
/// A missing artifact is fatal: no report is produced without it.
pub fn read_raw_diff(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
