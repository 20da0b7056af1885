// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON Schema gate.
//!
//! Compiles the schema as draft 2020-12 with format assertions enabled and
//! collects every error rather than stopping at the first.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::classify::Status;
use crate::error::{Error, ExitCode, Result};

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer to the failing value (empty for the document root).
    pub instance_path: String,
    pub message: String,
}

/// Result of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaOutcome {
    pub status: Status,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<SchemaViolation>,
}

impl SchemaOutcome {
    fn from_violations(violations: Vec<SchemaViolation>) -> Self {
        let status = if violations.is_empty() {
            Status::Success
        } else {
            Status::Error
        };
        Self { status, violations }
    }

    /// Whether the document satisfied the schema.
    pub fn passed(&self) -> bool {
        self.status == Status::Success
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> ExitCode {
        match self.status {
            Status::Success => ExitCode::Success,
            Status::Error => ExitCode::CheckFailed,
        }
    }
}

/// Compiled schema ready to validate documents.
pub struct SchemaGate {
    validator: jsonschema::Validator,
}

impl SchemaGate {
    /// Compile `schema`; `path` is used for error attribution.
    pub fn compile(schema: &Value, path: &Path) -> Result<Self> {
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| Error::Schema {
                message: e.to_string(),
                path: path.to_path_buf(),
            })?;
        Ok(Self { validator })
    }

    /// Validate `data`, collecting all violations.
    pub fn validate(&self, data: &Value) -> SchemaOutcome {
        let violations: Vec<_> = self
            .validator
            .iter_errors(data)
            .map(|error| SchemaViolation {
                instance_path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();

        tracing::debug!(violations = violations.len(), "schema validation complete");
        SchemaOutcome::from_violations(violations)
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
