//! Check command: report which variables are empty.
//!
//! Empty variables are reported, not treated as failures.

use anyhow::Result;
use game_config::ConfigProvider;
use game_config::constants::CONFIG_VARS;

use crate::formatters::{OutputFormat, VarStatus, format_var_status};

pub fn run(provider: &ConfigProvider, format: OutputFormat) -> Result<String> {
    let empty = provider.get()?.empty_vars();

    let statuses: Vec<VarStatus> = CONFIG_VARS
        .iter()
        .map(|&name| VarStatus {
            name,
            set: !empty.contains(&name),
        })
        .collect();

    format_var_status(&statuses, format)
}
