//! game-env - inspect the game backend's environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Construct the single `ConfigProvider` and hand it to the selected command.
//! - Decide the process exit status, including the fatal exit when `.env` is unavailable.
//!
//! Does NOT handle:
//! - Loading or caching configuration (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to stderr so stdout carries only command output.
//! - A `.env` failure prints and logs `Error loading .env file: <cause>` and exits non-zero.

mod args;
mod commands;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};
use game_config::ConfigProvider;
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let provider = ConfigProvider::new();

    match run_command(&cli, &provider) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Failed to write output: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
            std::process::exit(ExitCode::Success.as_i32());
        }
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:#}", e);
            tracing::error!(exit_code = code.as_i32(), "{:#}", e);
            std::process::exit(code.as_i32());
        }
    }
}
