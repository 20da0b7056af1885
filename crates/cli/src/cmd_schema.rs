// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.

use confguard::cli::{Cli, OutputFormat, SchemaArgs};
use confguard::color::resolve_color;
use confguard::discovery;
use confguard::document;
use confguard::error::ExitCode;
use confguard::output::FormatOptions;
use confguard::output::json::JsonFormatter;
use confguard::output::text::TextFormatter;
use confguard::report;
use confguard::schema::SchemaGate;

/// Run the schema command.
pub fn run(cli: &Cli, args: &SchemaArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let log = args.log.clone().unwrap_or(config.report.log);

    tracing::trace!("schema command starting");

    let schema = document::read_json(&args.schema)?;
    let data = document::read_json(&args.data)?;

    let gate = SchemaGate::compile(&schema, &args.schema)?;
    let outcome = gate.validate(&data);

    let report = report::schema_report(&outcome);
    report.write_to(&log)?;

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(), FormatOptions::default());
            formatter.write_schema(&args.data, &outcome, &log)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut formatter = JsonFormatter::new(stdout.lock());
            formatter.write_schema(&args.data, &outcome, &log)?;
        }
    }

    Ok(report.exit_code)
}
