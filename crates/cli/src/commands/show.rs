//! Show command: print the loaded configuration.
//!
//! Responsibilities:
//! - Load the configuration through the shared provider.
//! - Print every recognized variable, with secrets redacted unless requested.

use anyhow::Result;
use game_config::ConfigProvider;
use tracing::info;

use crate::formatters::{OutputFormat, format_snapshot};

pub fn run(
    provider: &ConfigProvider,
    format: OutputFormat,
    reveal_secrets: bool,
) -> Result<String> {
    let config = provider.get()?;

    if reveal_secrets {
        info!("printing configuration with secrets revealed");
    }

    format_snapshot(&config.snapshot(reveal_secrets), format)
}
