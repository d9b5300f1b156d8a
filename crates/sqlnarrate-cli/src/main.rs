//! sqlnarrate CLI
//!
//! Describes a SQL SELECT statement in Japanese.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sqlnarrate_cli::{Cli, Outcome};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let outcome = cli
        .run(io::stdin().lock(), io::stdout().lock())
        .context("failed to process the statement")?;

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Diagnostic => ExitCode::FAILURE,
    })
}
