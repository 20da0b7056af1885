// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON document loading.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Read and parse a JSON document from disk.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_json(&content, path)
}

/// Parse JSON content, attributing errors to `path`.
pub fn parse_json(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
