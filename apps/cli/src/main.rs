//! `forma`: descriptor-file front end for typed struct generation.
//!
//! Exit codes: 0 on success, 1 when `validate` finds violations, 2 on any
//! other error.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod logging;
mod schema_file;

use cli::{Cli, Command};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut config = Config::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;
    if let Some(level) = cli.log_level() {
        level.clone_into(&mut config.log_level);
    }
    logging::init(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Expand(args) => commands::expand::run(args, &config).map(|()| true),
        Command::Validate(args) => commands::validate::run(args),
        Command::Guards => {
            commands::guards();
            Ok(true)
        }
    }
}
