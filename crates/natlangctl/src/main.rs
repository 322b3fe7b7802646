//! Natlang Control - CLI for the review responder
//!
//! With no subcommand, starts the interactive review session.

use anyhow::{Context, Result};
use clap::Parser;
use natlang_common::NatlangConfig;
use natlangctl::cli::Cli;
use natlangctl::commands::{self, Settings};
use natlangctl::errors::{exit_code_for, EXIT_SUCCESS};
use natlangctl::logging;
use std::io;
use tracing::debug;

fn run(cli: Cli) -> Result<()> {
    let config_path = NatlangConfig::locate(cli.config.as_deref());
    let config = match &config_path {
        Some(path) => NatlangConfig::load_from(path)
            .with_context(|| format!("Cannot load config from {}", path.display()))?,
        None => NatlangConfig::default(),
    };

    logging::init(logging::effective_level(cli.log_level.as_deref(), &config));
    match &config_path {
        Some(path) => debug!(path = %path.display(), "Loaded config"),
        None => debug!("No config file, using defaults"),
    }
    debug!(version = env!("NATLANG_VERSION"), "natlangctl starting");

    let settings = Settings::new(config, cli.template);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, &settings, &mut out)
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}
