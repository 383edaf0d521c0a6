//! `trellis`: inspect and validate form schemas from the command line.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?;
    trellis_log::init_with(config.log.clone())?;
    tracing::debug!(?config, "configuration loaded");

    commands::dispatch(cli.cmd, &config)
}
