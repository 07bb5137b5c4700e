//! CLI command implementations.

pub mod check;
pub mod show;

use anyhow::Result;
use game_config::ConfigProvider;

use crate::args::{Cli, Commands};
use crate::formatters::OutputFormat;

/// Run the selected command and return what it prints to stdout.
pub fn run_command(cli: &Cli, provider: &ConfigProvider) -> Result<String> {
    let format = OutputFormat::parse(&cli.output)?;

    match cli.selected_command() {
        Commands::Show { reveal_secrets } => show::run(provider, format, reveal_secrets),
        Commands::Check => check::run(provider, format),
    }
}
