// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change classification for configuration pull requests.
//!
//! The only accepted change is appending brand-new elements to the guarded
//! section (`targets` by default). Each diff entry falls into one class:
//!
//! | Class        | Rule                                                          |
//! |--------------|---------------------------------------------------------------|
//! | `OutOfScope` | path never passes through the section key                     |
//! | `Mutation`   | Edit/New touching a named field after the section, any        |
//! |              | ArrayChange, or the section itself being created or replaced  |
//! | `Removal`    | Delete anywhere inside the section                            |
//! | `Append`     | New whose trailing path is made only of array indices         |
//!
//! Index versus key is decided by the structural segment type from
//! [`crate::diff`], never by parsing the segment text.

use serde::Serialize;
use serde_json::Value;

use crate::diff::{self, ChangeKind, DiffEntry};
use crate::error::ExitCode;

/// Section name guarded when none is configured.
pub const DEFAULT_SECTION: &str = "targets";

/// Outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Error,
}

/// Classification of a single diff entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeClass {
    /// New element appended to the section.
    Append,
    /// Change outside the section.
    OutOfScope,
    /// Edit of, or field added to, an existing element.
    Mutation,
    /// Something inside the section was removed.
    Removal,
}

/// Classify one entry against the guarded section.
pub fn classify_entry(entry: &DiffEntry, section: &str) -> ChangeClass {
    let Some(pos) = entry
        .path
        .iter()
        .position(|segment| segment.as_key() == Some(section))
    else {
        return ChangeClass::OutOfScope;
    };
    let trailing = &entry.path[pos + 1..];
    let touches_field = trailing.iter().any(|segment| !segment.is_index());

    match entry.kind {
        ChangeKind::Delete => ChangeClass::Removal,
        ChangeKind::ArrayChange => ChangeClass::Mutation,
        ChangeKind::Edit => ChangeClass::Mutation,
        ChangeKind::New if trailing.is_empty() || touches_field => ChangeClass::Mutation,
        ChangeKind::New => ChangeClass::Append,
    }
}

/// Classification outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
    pub all_changes: Vec<DiffEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub out_of_scope_changes: Vec<DiffEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disallowed_target_changes: Vec<DiffEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_target_changes: Vec<DiffEntry>,
}

impl Verdict {
    /// Whether the change set is accepted.
    pub fn passed(&self) -> bool {
        self.status == Status::Success
    }

    /// Process exit code for this verdict.
    pub fn exit_code(&self) -> ExitCode {
        match self.status {
            Status::Success => ExitCode::Success,
            Status::Error => ExitCode::CheckFailed,
        }
    }
}

/// Partitions structural diffs into allowed target appends and violations.
#[derive(Debug, Clone)]
pub struct ChangeClassifier {
    section: String,
}

impl Default for ChangeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION)
    }
}

impl ChangeClassifier {
    /// Create a classifier guarding the named section.
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }

    /// Guarded section name.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Diff two documents and classify the result.
    pub fn classify_documents(&self, old: &Value, new: &Value) -> Verdict {
        self.classify(diff::diff(old, new))
    }

    /// Classify a pre-computed diff.
    pub fn classify(&self, changes: Vec<DiffEntry>) -> Verdict {
        let mut appends = 0usize;
        let mut out_of_scope = Vec::new();
        let mut disallowed = Vec::new();
        let mut removed = Vec::new();

        for entry in &changes {
            let class = classify_entry(entry, &self.section);
            tracing::trace!(
                kind = %entry.kind.code(),
                path = %entry.path_string(),
                ?class,
                "classified change"
            );
            match class {
                ChangeClass::Append => appends += 1,
                ChangeClass::OutOfScope => out_of_scope.push(entry.clone()),
                ChangeClass::Mutation => disallowed.push(entry.clone()),
                ChangeClass::Removal => removed.push(entry.clone()),
            }
        }

        tracing::debug!(
            total = changes.len(),
            appends,
            out_of_scope = out_of_scope.len(),
            disallowed = disallowed.len(),
            removed = removed.len(),
            "classification complete"
        );

        let section = &self.section;
        let (status, message) = if !out_of_scope.is_empty() || changes.is_empty() {
            (
                Status::Error,
                format!("Changes outside of \"{section}\" or no changes detected."),
            )
        } else if !disallowed.is_empty() {
            (
                Status::Error,
                format!("Editing or adding new fields to existing \"{section}\" is not allowed."),
            )
        } else if !removed.is_empty() {
            (
                Status::Error,
                format!("Removing existing \"{section}\" or their fields is not allowed."),
            )
        } else if appends > 0 {
            (
                Status::Success,
                format!(
                    "Only new {section} have been added, with no modifications to existing ones."
                ),
            )
        } else {
            (
                Status::Error,
                format!("No new \"{section}\" detected."),
            )
        };

        Verdict {
            status,
            message,
            all_changes: changes,
            out_of_scope_changes: out_of_scope,
            disallowed_target_changes: disallowed,
            removed_target_changes: removed,
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
