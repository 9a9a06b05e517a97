//! statusgen CLI
//!
//! Regenerates, previews, or checks the generated status-code regions of a
//! declaration/implementation file pair.

mod cli;
mod commands;
mod error;
mod exit_codes;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(?cli, "parsed arguments");

    // Flag combinations are validated before any file is opened.
    let actions = cli.actions()?;
    let cwd = std::env::current_dir()?;
    commands::run_sync(&cli, actions, &cwd)
}
