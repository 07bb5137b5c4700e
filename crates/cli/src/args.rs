//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "game-env")]
#[command(about = "Inspect the game backend's environment configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Reads .env from the working directory. Variables already set in the\nenvironment take precedence over .env values. Set DOTENV_DISABLED=1 to skip .env.\n\nExamples:\n  game-env show\n  game-env show --reveal-secrets\n  game-env -o json check\n"
)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    /// Command to run (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the loaded configuration
    Show {
        /// Print secret values instead of [REDACTED]
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Report which variables are empty
    Check,
}

impl Cli {
    /// The command to run, falling back to `show` with secrets redacted.
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show {
            reveal_secrets: false,
        })
    }
}
