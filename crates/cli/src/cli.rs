// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// CI guards for configuration pull requests
#[derive(Parser)]
#[command(name = "confguard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "CONFGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Allow only newly appended targets in a configuration change
    Changes(ChangesArgs),
    /// Validate a document against a JSON Schema
    Schema(SchemaArgs),
}

#[derive(clap::Args, Default)]
pub struct ChangesArgs {
    /// Configuration document to check (default: config.prod.json)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Branch holding the prior revision (default: main, or master)
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Read the prior revision from a file instead of git
    #[arg(long, value_name = "PATH", conflicts_with = "base")]
    pub old: Option<PathBuf>,

    /// Raw unified diff artifact to embed (default: diff_output.txt)
    #[arg(long, value_name = "PATH")]
    pub diff_file: Option<PathBuf>,

    /// Section that may only grow (default: targets)
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,

    /// Markdown report artifact (default: log.md)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SchemaArgs {
    /// JSON Schema document
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Document to validate
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Markdown report artifact (default: log.md)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
