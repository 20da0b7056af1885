// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changes command implementation.

use std::path::Path;

use confguard::classify::{ChangeClassifier, Verdict};
use confguard::cli::{ChangesArgs, Cli, OutputFormat};
use confguard::color::resolve_color;
use confguard::discovery;
use confguard::document;
use confguard::error::ExitCode;
use confguard::output::FormatOptions;
use confguard::output::json::JsonFormatter;
use confguard::output::text::TextFormatter;
use confguard::report;
use confguard::revision::{
    FileRevisionProvider, GitRevisionProvider, RevisionId, RevisionProvider, detect_base_branch,
};

/// Run the changes command.
pub fn run(cli: &Cli, args: &ChangesArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    // CLI flags override config, config overrides defaults
    let file = args.file.clone().unwrap_or(config.changes.file);
    let section = args.section.clone().unwrap_or(config.changes.section);
    let diff_file = args.diff_file.clone().unwrap_or(config.changes.diff_file);
    let log = args.log.clone().unwrap_or(config.report.log);

    tracing::trace!("changes command starting");

    let new = document::read_json(&file)?;
    let old = match &args.old {
        Some(path) => {
            let id = RevisionId::new("", &file);
            FileRevisionProvider::new(path).load(&id)?
        }
        None => {
            let base = args
                .base
                .clone()
                .or(config.changes.base)
                .or_else(|| detect_base_branch(&cwd))
                .unwrap_or_else(|| "main".to_string());
            tracing::debug!("comparing against {}", base);
            GitRevisionProvider::new(&cwd).load(&RevisionId::new(base, &file))?
        }
    };

    let verdict = ChangeClassifier::new(&section).classify_documents(&old, &new);
    let raw_diff = report::read_raw_diff(&diff_file)?;

    let report = report::changes_report(&verdict, &raw_diff, &section);
    report.write_to(&log)?;

    print_verdict(args.output, &file, &verdict, &log)?;
    Ok(report.exit_code)
}

fn print_verdict(
    format: OutputFormat,
    file: &Path,
    verdict: &Verdict,
    log: &Path,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(), FormatOptions::default());
            formatter.write_verdict(file, verdict, log)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut formatter = JsonFormatter::new(stdout.lock());
            formatter.write_verdict(file, verdict, log)?;
        }
    }
    Ok(())
}
