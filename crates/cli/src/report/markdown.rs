// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format report output.

use std::fmt::Write;

use serde_json::Value;

use crate::classify::{DEFAULT_SECTION, Status, Verdict};
use crate::diff::{ChangeKind, DiffEntry};
use crate::schema::SchemaOutcome;

/// Markdown report formatter.
pub struct MarkdownFormatter {
    section: String,
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION)
    }
}

impl MarkdownFormatter {
    /// Create a formatter naming `section` in its headings.
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }

    /// Format a change verdict with the raw unified diff embedded.
    pub fn format_verdict(&self, verdict: &Verdict, raw_diff: &str) -> String {
        let mut output = String::with_capacity(raw_diff.len() + 512);
        // Writing to a String cannot fail.
        let _ = self.write_verdict(&mut output, verdict, raw_diff);
        output
    }

    fn write_verdict(
        &self,
        out: &mut String,
        verdict: &Verdict,
        raw_diff: &str,
    ) -> std::fmt::Result {
        let section = &self.section;
        match verdict.status {
            Status::Success => {
                writeln!(out, "## ✅ SUCCESS: {}\n", verdict.message)?;
                write_fenced_diff(out, raw_diff)?;
            }
            Status::Error => {
                writeln!(out, "## ❌ ERROR: {}\n", verdict.message)?;
                write_fenced_diff(out, raw_diff)?;

                write_change_list(
                    out,
                    &format!("### ❌ WARNING: Changes outside of \"{section}\" section:"),
                    &verdict.out_of_scope_changes,
                )?;
                write_change_list(
                    out,
                    &format!(
                        "### ❌ ERROR: Editing or adding new fields to existing \"{section}\" section is not allowed:"
                    ),
                    &verdict.disallowed_target_changes,
                )?;
                write_change_list(
                    out,
                    &format!(
                        "### ❌ ERROR: Removing existing \"{section}\" or their fields is not allowed:"
                    ),
                    &verdict.removed_target_changes,
                )?;
            }
        }
        Ok(())
    }

    /// Format a schema validation outcome.
    pub fn format_schema(&self, outcome: &SchemaOutcome) -> String {
        let mut output = String::with_capacity(256);
        let _ = write_schema(&mut output, outcome);
        output
    }
}

fn write_schema(out: &mut String, outcome: &SchemaOutcome) -> std::fmt::Result {
    match outcome.status {
        Status::Success => {
            writeln!(out, "## ✅ SUCCESS: Check Schema test passed \n")?;
        }
        Status::Error => {
            writeln!(out, "## ❌ ERROR: Check Schema test failed \n")?;
            writeln!(out, "### Details:\n")?;
            writeln!(out, "```diff")?;
            for violation in &outcome.violations {
                writeln!(out, "- {} {}", violation.instance_path, violation.message)?;
            }
            writeln!(out, "\n```")?;
        }
    }
    Ok(())
}

fn write_fenced_diff(out: &mut String, raw_diff: &str) -> std::fmt::Result {
    writeln!(out, "```diff")?;
    out.push_str(raw_diff);
    writeln!(out, "\n```")
}

fn write_change_list(out: &mut String, heading: &str, changes: &[DiffEntry]) -> std::fmt::Result {
    if changes.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{heading}")?;
    writeln!(out, "```diff")?;
    for change in changes {
        write_change(out, change)?;
    }
    writeln!(out, "\n```")
}

/// Render one entry as removed/added lines.
fn write_change(out: &mut String, change: &DiffEntry) -> std::fmt::Result {
    let path = change.path_string();
    let removed = |out: &mut String| writeln!(out, "- {path} : {}", format_value(change.lhs.as_ref()));
    let added = |out: &mut String| writeln!(out, "+ {path} : {}", format_value(change.rhs.as_ref()));

    match change.kind {
        ChangeKind::Edit | ChangeKind::ArrayChange => {
            removed(out)?;
            added(out)
        }
        ChangeKind::New => added(out),
        ChangeKind::Delete => removed(out),
    }
}

/// Render a value for a report line: strings bare, everything else as
/// compact JSON.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
