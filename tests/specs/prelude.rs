//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing confguard CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the confguard binary
pub fn confguard_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("confguard"))
}

/// Create a builder for `confguard changes`
pub fn changes() -> GuardBuilder<Text> {
    GuardBuilder::new("changes")
}

/// Create a builder for `confguard schema`
pub fn schema() -> GuardBuilder<Text> {
    GuardBuilder::new("schema")
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Fluent builder for one guard invocation
pub struct GuardBuilder<Mode = Text> {
    command: &'static str,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl GuardBuilder<Text> {
    fn new(command: &'static str) -> Self {
        Self {
            command,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    /// Switch to JSON output mode
    pub fn json(self) -> GuardBuilder<Json> {
        GuardBuilder {
            command: self.command,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    /// Run and assert the guard passes (exit 0)
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and assert the guard fails its check (exit 1)
    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    /// Run and assert a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

#[allow(dead_code)]
impl GuardBuilder<Json> {
    /// Run, assert exit 0, and parse JSON output
    pub fn passes(self) -> serde_json::Value {
        self.run(0)
    }

    /// Run, assert exit 1, and parse JSON output
    pub fn fails(self) -> serde_json::Value {
        self.run(1)
    }

    fn run(self, code: i32) -> serde_json::Value {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "stderr:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
    }
}

#[allow(dead_code)]
impl<Mode: 'static> GuardBuilder<Mode> {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the command without running it
    fn command(self) -> Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = confguard_cmd();
        cmd.arg(self.command);
        cmd.args(&self.args);

        if is_json {
            cmd.args(["-o", "json"]);
        }

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // Keep specs independent of the developer's environment
        cmd.env_remove("CONFGUARD_CONFIG");
        cmd.env_remove("CONFGUARD_LOG");
        cmd.env_remove("NO_COLOR");
        cmd.env_remove("COLOR");

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

/// Result of a guard run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    ///
    /// ```ignore
    /// .stdout_lacks("\x1b[")  // doesn't contain
    /// ```
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

/// Get path to a test fixture
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Project
// =============================================================================

/// Temporary test project directory with helper methods.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.file("config.prod.json", r#"{"targets": []}"#);
/// changes().pwd(temp.path()).args(&["--old", "old.json"]).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project holding a prior revision (`old.json`), the current
    /// `config.prod.json`, and a placeholder `diff_output.txt`.
    pub fn with_revisions(old: &str, new: &str) -> Self {
        let temp = Self::empty();
        temp.file("old.json", old);
        temp.file("config.prod.json", new);
        temp.file("diff_output.txt", "@@ -1 +1 @@\n-old\n+new");
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write confguard.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("confguard.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Read a file relative to the project
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path.as_ref())).unwrap()
    }

    /// Whether a file exists relative to the project
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.dir.path().join(path.as_ref()).exists()
    }
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

fn git(project: &Project, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(project.path())
        .output()
        .expect("git should run");
    assert!(output.status.success(), "git {:?} failed", args);
}

/// Initialize a git repo on `main` with minimal config
pub fn git_init(project: &Project) {
    git(project, &["init"]);
    git(project, &["config", "user.email", "test@example.com"]);
    git(project, &["config", "user.name", "Test User"]);
    git(project, &["symbolic-ref", "HEAD", "refs/heads/main"]);
}

/// Stage everything and commit
pub fn git_commit(project: &Project, message: &str) {
    git(project, &["add", "-A"]);
    git(project, &["commit", "-m", message]);
}

/// Create and switch to a branch
pub fn git_branch(project: &Project, name: &str) {
    git(project, &["checkout", "-b", name]);
}
