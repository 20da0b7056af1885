// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural diff between two JSON documents.
//!
//! Produces an ordered list of typed entries describing how the new document
//! differs from the old one. Path segments keep the structural type they came
//! from:
//! - object members become [`PathSegment::Key`]
//! - array elements become [`PathSegment::Index`]
//!
//! A member named `"0"` is therefore a key, never an index.
//!
//! ## Entry Order
//!
//! Object members are visited in old-document order, followed by members
//! that only exist in the new document. Arrays are compared element by
//! element over their common length; trailing elements of the old array are
//! reported as deletions, trailing elements of the new array as additions.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One step in a path through a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object member name.
    Key(String),
    /// Array element position.
    Index(usize),
}

impl PathSegment {
    /// True for array positions.
    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }

    /// Member name, if this segment is a key.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Kind of structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Value changed at an existing path.
    Edit,
    /// Path did not exist before.
    New,
    /// Path was removed.
    Delete,
    /// Value changed between array and non-array shape.
    ArrayChange,
}

impl ChangeKind {
    /// Single-letter code used in debug logs.
    pub fn code(self) -> char {
        match self {
            ChangeKind::Edit => 'E',
            ChangeKind::New => 'N',
            ChangeKind::Delete => 'D',
            ChangeKind::ArrayChange => 'A',
        }
    }
}

/// A single detected difference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub kind: ChangeKind,
    pub path: Vec<PathSegment>,

    /// Value before the change (Edit, Delete, ArrayChange).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lhs: Option<Value>,

    /// Value after the change (Edit, New, ArrayChange).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhs: Option<Value>,
}

impl DiffEntry {
    /// Value changed in place.
    pub fn edit(path: Vec<PathSegment>, lhs: Value, rhs: Value) -> Self {
        Self {
            kind: ChangeKind::Edit,
            path,
            lhs: Some(lhs),
            rhs: Some(rhs),
        }
    }

    /// Value added at a path that did not exist.
    pub fn new(path: Vec<PathSegment>, rhs: Value) -> Self {
        Self {
            kind: ChangeKind::New,
            path,
            lhs: None,
            rhs: Some(rhs),
        }
    }

    /// Value removed.
    pub fn delete(path: Vec<PathSegment>, lhs: Value) -> Self {
        Self {
            kind: ChangeKind::Delete,
            path,
            lhs: Some(lhs),
            rhs: None,
        }
    }

    /// Value switched between array and non-array.
    pub fn array_change(path: Vec<PathSegment>, lhs: Value, rhs: Value) -> Self {
        Self {
            kind: ChangeKind::ArrayChange,
            path,
            lhs: Some(lhs),
            rhs: Some(rhs),
        }
    }

    /// Path joined with `.` (e.g., `targets.0.name`).
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

/// Compute the structural diff from `old` to `new`.
///
/// Returns an empty list when the documents are equal.
pub fn diff(old: &Value, new: &Value) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    let mut path = Vec::new();
    walk(old, new, &mut path, &mut entries);
    entries
}

fn walk(lhs: &Value, rhs: &Value, path: &mut Vec<PathSegment>, out: &mut Vec<DiffEntry>) {
    match (lhs, rhs) {
        (Value::Object(old), Value::Object(new)) => {
            for (key, old_value) in old {
                path.push(PathSegment::Key(key.clone()));
                match new.get(key) {
                    Some(new_value) => walk(old_value, new_value, path, out),
                    None => out.push(DiffEntry::delete(path.clone(), old_value.clone())),
                }
                path.pop();
            }
            for (key, new_value) in new {
                if !old.contains_key(key) {
                    path.push(PathSegment::Key(key.clone()));
                    out.push(DiffEntry::new(path.clone(), new_value.clone()));
                    path.pop();
                }
            }
        }
        (Value::Array(old), Value::Array(new)) => {
            let common = old.len().min(new.len());
            for (index, (old_item, new_item)) in old.iter().zip(new).enumerate() {
                path.push(PathSegment::Index(index));
                walk(old_item, new_item, path, out);
                path.pop();
            }
            for (index, old_item) in old.iter().enumerate().skip(common) {
                path.push(PathSegment::Index(index));
                out.push(DiffEntry::delete(path.clone(), old_item.clone()));
                path.pop();
            }
            for (index, new_item) in new.iter().enumerate().skip(common) {
                path.push(PathSegment::Index(index));
                out.push(DiffEntry::new(path.clone(), new_item.clone()));
                path.pop();
            }
        }
        (Value::Array(_), _) | (_, Value::Array(_)) => {
            out.push(DiffEntry::array_change(
                path.clone(),
                lhs.clone(),
                rhs.clone(),
            ));
        }
        _ if lhs != rhs => {
            out.push(DiffEntry::edit(path.clone(), lhs.clone(), rhs.clone()));
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
