// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Confguard error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON.
    #[error("parse error: {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Prior revision could not be resolved from git.
    #[error("git error: {message}")]
    Git { message: String },

    /// Schema document could not be compiled.
    #[error("schema error: {}: {message}", .path.display())]
    Schema { message: String, path: PathBuf },
}

/// Result type using confguard Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Check passed
    Success = 0,
    /// Check failed (verdict or schema violation)
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error (I/O, git, malformed document)
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Schema { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::Parse { .. } | Error::Git { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
