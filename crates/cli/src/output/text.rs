// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <check>: FAIL
//!   <file>: <message>
//!     - <path> : <old>
//!     + <path> : <new>
//!   report: <log>
//! ```

use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::FormatOptions;
use crate::classify::Verdict;
use crate::color::scheme;
use crate::diff::{ChangeKind, DiffEntry};
use crate::report::format_value;
use crate::schema::SchemaOutcome;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the change-check summary.
    pub fn write_verdict(
        &mut self,
        file: &Path,
        verdict: &Verdict,
        log: &Path,
    ) -> std::io::Result<()> {
        self.write_status("changes", verdict.passed())?;
        self.write_message(file, &verdict.message)?;

        let violations = verdict
            .out_of_scope_changes
            .iter()
            .chain(&verdict.disallowed_target_changes)
            .chain(&verdict.removed_target_changes);
        let total = verdict.out_of_scope_changes.len()
            + verdict.disallowed_target_changes.len()
            + verdict.removed_target_changes.len();

        let mut shown = 0;
        for change in violations {
            if self.options.limit.is_some_and(|limit| shown >= limit) {
                break;
            }
            self.write_change(change)?;
            shown += 1;
        }
        self.write_truncated(total, shown)?;

        writeln!(self.writer, "  report: {}", log.display())?;
        self.writer.flush()
    }

    /// Write the schema-check summary.
    pub fn write_schema(
        &mut self,
        file: &Path,
        outcome: &SchemaOutcome,
        log: &Path,
    ) -> std::io::Result<()> {
        self.write_status("schema", outcome.passed())?;

        let mut shown = 0;
        for violation in &outcome.violations {
            if self.options.limit.is_some_and(|limit| shown >= limit) {
                break;
            }
            let location = if violation.instance_path.is_empty() {
                "/"
            } else {
                violation.instance_path.as_str()
            };
            write!(self.writer, "  ")?;
            self.write_colored(&scheme::path(), &file.display().to_string())?;
            write!(self.writer, ": ")?;
            self.write_colored(&scheme::path(), location)?;
            writeln!(self.writer, " {}", violation.message)?;
            shown += 1;
        }
        self.write_truncated(outcome.violations.len(), shown)?;

        writeln!(self.writer, "  report: {}", log.display())?;
        self.writer.flush()
    }

    fn write_status(&mut self, check: &str, passed: bool) -> std::io::Result<()> {
        self.write_colored(&scheme::check_name(), check)?;
        write!(self.writer, ": ")?;
        if passed {
            self.write_colored(&scheme::pass(), "PASS")?;
        } else {
            self.write_colored(&scheme::fail(), "FAIL")?;
        }
        writeln!(self.writer)
    }

    fn write_message(&mut self, file: &Path, message: &str) -> std::io::Result<()> {
        write!(self.writer, "  ")?;
        self.write_colored(&scheme::path(), &file.display().to_string())?;
        writeln!(self.writer, ": {}", message)
    }

    fn write_change(&mut self, change: &DiffEntry) -> std::io::Result<()> {
        let path = change.path_string();
        let removed = format!("    - {} : {}", path, format_value(change.lhs.as_ref()));
        let added = format!("    + {} : {}", path, format_value(change.rhs.as_ref()));

        match change.kind {
            ChangeKind::Edit | ChangeKind::ArrayChange => {
                self.write_line(&scheme::diff_remove(), &removed)?;
                self.write_line(&scheme::diff_add(), &added)
            }
            ChangeKind::New => self.write_line(&scheme::diff_add(), &added),
            ChangeKind::Delete => self.write_line(&scheme::diff_remove(), &removed),
        }
    }

    fn write_truncated(&mut self, total: usize, shown: usize) -> std::io::Result<()> {
        if total > shown {
            writeln!(self.writer, "  ... and {} more", total - shown)?;
        }
        Ok(())
    }

    fn write_line(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.write_colored(spec, text)?;
        writeln!(self.writer)
    }

    fn write_colored(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.writer.set_color(spec)?;
        write!(self.writer, "{}", text)?;
        self.writer.reset()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
