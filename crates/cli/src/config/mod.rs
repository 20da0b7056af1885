// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles confguard.toml parsing with version validation and unknown key
//! warnings. Every field is optional; CLI flags override file values, and
//! built-in defaults fill whatever neither sets.

mod parse;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::classify::DEFAULT_SECTION;
use crate::error::{Error, Result};
use crate::report::{DEFAULT_DIFF_FILE, DEFAULT_LOG_FILE};
use parse::{parse_changes_config, parse_report_config, warn_unknown_key};

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "confguard.toml";

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Configuration file checked when no path is given.
pub const DEFAULT_CONFIG_DOCUMENT: &str = "config.prod.json";

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "changes", "report"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    changes: Option<toml::Value>,

    #[serde(default)]
    report: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Change check settings.
    pub changes: ChangesConfig,

    /// Report artifact settings.
    pub report: ReportConfig,
}

/// Settings for `confguard changes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesConfig {
    /// Base branch holding the prior revision (None = auto-detect).
    pub base: Option<String>,

    /// Configuration document to check.
    pub file: PathBuf,

    /// Section that may only grow by appended elements.
    pub section: String,

    /// Raw unified diff artifact embedded in the report.
    pub diff_file: PathBuf,
}

impl Default for ChangesConfig {
    fn default() -> Self {
        Self {
            base: None,
            file: PathBuf::from(DEFAULT_CONFIG_DOCUMENT),
            section: DEFAULT_SECTION.to_string(),
            diff_file: PathBuf::from(DEFAULT_DIFF_FILE),
        }
    }
}

/// Settings for report artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Markdown log artifact path.
    pub log: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade confguard to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    Ok(Config {
        version,
        changes: parse_changes_config(flexible.changes.as_ref(), path),
        report: parse_report_config(flexible.report.as_ref(), path),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
