//! Command-line entry point for generating switch topologies.
//!
//! Parses arguments with clap, generates the selected topology, and writes it to stdout or the
//! requested file. Logging is initialised first so generation emits structured diagnostics to
//! stderr.

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use topogen::{
    cli::{Cli, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let strategy = cli.strategy();
    run_cli(&cli, io::stdout().lock())
        .with_context(|| format!("failed to generate {} topology", strategy.name()))?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format_args!("{err:#}"), "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
