//! # Stockroom CLI
//!
//! Runs the login, registration and product rules from the command line and
//! prints a JSON report.
//!
//! ## Exit Codes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  0  input is valid                                                      │
//! │  1  input failed validation (report explains why)                      │
//! │  2  usage, IO, JSON or configuration error (message on stderr)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::commands::{execute, open_input, write_report, Command};
use crate::config::CliConfig;
use crate::error::CliResult;

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Login and product form rules")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, filter) = match CliConfig::load().and_then(|c| c.env_filter().map(|f| (c, f))) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(command = cli.command.name(), output = ?config.output, "Starting stockroom");

    match run(&cli.command, &config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run(command: &Command, config: &CliConfig) -> CliResult<u8> {
    let input = open_input(command.input_path())?;
    let report = execute(command, input)?;
    write_report(&report, io::stdout().lock(), config.output)?;
    Ok(report.exit_code())
}
