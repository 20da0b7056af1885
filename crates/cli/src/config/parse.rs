// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::{Path, PathBuf};

use super::{ChangesConfig, ReportConfig};

/// Parse a TOML string value as Option<String>.
fn parse_string_option(value: Option<&toml::Value>) -> Option<String> {
    value.and_then(|v| v.as_str()).map(String::from)
}

/// Parse a TOML string value as a path, falling back to `default`.
fn parse_path_or(value: Option<&toml::Value>, default: PathBuf) -> PathBuf {
    parse_string_option(value)
        .map(PathBuf::from)
        .unwrap_or(default)
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "confguard: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Parse `[changes]` from TOML value.
pub(super) fn parse_changes_config(value: Option<&toml::Value>, path: &Path) -> ChangesConfig {
    let defaults = ChangesConfig::default();
    let Some(toml::Value::Table(t)) = value else {
        return defaults;
    };

    for key in t.keys() {
        if !["base", "file", "section", "diff_file"].contains(&key.as_str()) {
            warn_unknown_key(path, &format!("changes.{}", key));
        }
    }

    ChangesConfig {
        base: parse_string_option(t.get("base")),
        file: parse_path_or(t.get("file"), defaults.file),
        section: parse_string_option(t.get("section")).unwrap_or(defaults.section),
        diff_file: parse_path_or(t.get("diff_file"), defaults.diff_file),
    }
}

/// Parse `[report]` from TOML value.
pub(super) fn parse_report_config(value: Option<&toml::Value>, path: &Path) -> ReportConfig {
    let defaults = ReportConfig::default();
    let Some(toml::Value::Table(t)) = value else {
        return defaults;
    };

    for key in t.keys() {
        if key != "log" {
            warn_unknown_key(path, &format!("report.{}", key));
        }
    }

    ReportConfig {
        log: parse_path_or(t.get("log"), defaults.log),
    }
}
