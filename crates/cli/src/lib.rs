// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CI guards for configuration pull requests.
//!
//! - `changes`: only appends to one section of a JSON config are allowed
//! - `schema`: a JSON document must satisfy a JSON Schema

pub mod classify;
pub mod cli;
pub mod color;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod document;
pub mod error;
pub mod output;
pub mod report;
pub mod revision;
pub mod schema;

pub use classify::{ChangeClassifier, Status, Verdict};
pub use cli::{ChangesArgs, Cli, Command, OutputFormat, SchemaArgs};
pub use config::Config;
pub use diff::{ChangeKind, DiffEntry, PathSegment};
pub use error::{Error, ExitCode, Result};
pub use revision::{FileRevisionProvider, GitRevisionProvider, RevisionId, RevisionProvider};
pub use schema::{SchemaGate, SchemaOutcome, SchemaViolation};
