// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prior-revision lookup.
//!
//! The change check compares the working copy of a configuration file with
//! the version on the base branch. [`RevisionProvider`] abstracts where that
//! version comes from:
//! - [`GitRevisionProvider`] reads the blob at `<reference>:<path>` via git2
//! - [`FileRevisionProvider`] reads an explicit file on disk

use std::path::{Path, PathBuf};

use git2::Repository;
use serde_json::Value;

use crate::document;
use crate::error::{Error, Result};

/// Identifies a document at a revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionId {
    /// Branch, tag, or commit (e.g., `main`).
    pub reference: String,
    /// Document path, absolute or relative to the provider root.
    pub path: PathBuf,
}

impl RevisionId {
    pub fn new(reference: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            path: path.into(),
        }
    }
}

/// Source of prior document revisions.
pub trait RevisionProvider {
    /// Load and parse the document identified by `id`.
    fn load(&self, id: &RevisionId) -> Result<Value>;
}

/// Reads prior revisions from the git repository containing `root`.
pub struct GitRevisionProvider {
    root: PathBuf,
}

impl GitRevisionProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of `path` relative to the repository working directory, with
    /// `/` separators as git expects in `<rev>:<path>` specs.
    fn repo_relative(&self, repo: &Repository, path: &Path) -> String {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        let absolute = absolute.canonicalize().unwrap_or(absolute);

        let relative = repo
            .workdir()
            .map(|w| w.canonicalize().unwrap_or_else(|_| w.to_path_buf()))
            .and_then(|workdir| absolute.strip_prefix(&workdir).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| path.to_path_buf());

        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl RevisionProvider for GitRevisionProvider {
    fn load(&self, id: &RevisionId) -> Result<Value> {
        let repo = Repository::discover(&self.root).map_err(|e| Error::Git {
            message: format!("failed to open repository at {}: {}", self.root.display(), e),
        })?;

        let spec = format!("{}:{}", id.reference, self.repo_relative(&repo, &id.path));
        tracing::debug!("loading prior revision {}", spec);

        let blob = repo
            .revparse_single(&spec)
            .and_then(|object| object.peel_to_blob())
            .map_err(|e| Error::Git {
                message: format!("failed to resolve {}: {}", spec, e.message()),
            })?;

        let content = std::str::from_utf8(blob.content()).map_err(|_| Error::Git {
            message: format!("{} is not valid UTF-8", spec),
        })?;

        document::parse_json(content, Path::new(&spec))
    }
}

/// Reads the prior revision from a fixed file, ignoring the reference.
pub struct FileRevisionProvider {
    path: PathBuf,
}

impl FileRevisionProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RevisionProvider for FileRevisionProvider {
    fn load(&self, _id: &RevisionId) -> Result<Value> {
        tracing::debug!("loading prior revision from {}", self.path.display());
        document::read_json(&self.path)
    }
}

/// Detect the base branch (main or master) when none is configured.
pub fn detect_base_branch(root: &Path) -> Option<String> {
    let repo = Repository::discover(root).ok()?;

    for name in ["main", "master"] {
        if repo.find_branch(name, git2::BranchType::Local).is_ok() {
            return Some(name.to_string());
        }
    }

    // Shallow CI checkouts often only have the remote-tracking branch
    for name in ["origin/main", "origin/master"] {
        if repo.revparse_single(name).is_ok() {
            return Some(name.to_string());
        }
    }

    None
}

#[cfg(test)]
#[path = "revision_tests.rs"]
mod tests;
