use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod args;
mod report;
mod usage;

use args::Cli;
use report::Report;
use usage::render_usage;

/// Exit status when the pass halted on a sequence error.
const SEQUENCE_ERROR: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let registry = cli.registry().context("Failed to build descriptor set")?;
    debug!(descriptors = registry.len(), "descriptor set ready");

    if cli.usage {
        print!("{}", render_usage(&registry, "desequencer", !cli.no_color));
        return Ok(ExitCode::SUCCESS);
    }

    let result = registry.desequence(&cli.tokens);
    if let Some(diagnostic) = result.outcome().diagnostic() {
        info!(%diagnostic, "command line rejected");
    }

    let report = Report::new(&registry, &result);
    println!("{}", report.to_json(cli.raw)?);

    if result.sequence_error() {
        Ok(ExitCode::from(SEQUENCE_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_env("DESEQUENCER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
