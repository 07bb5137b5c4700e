//! Output formatting for CLI commands.
//!
//! Responsibilities:
//! - Render a configuration snapshot or a variable report as text or JSON.
//!
//! Does NOT handle:
//! - Redaction decisions (made by `EnvConfig::snapshot`).
//! - Printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Text output uses dotenv-style `KEY=value` lines.
//! - JSON output is pretty-printed and ends with a newline.

use anyhow::{Context, Result};
use game_config::EnvSnapshot;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Whether a recognized variable has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarStatus {
    pub name: &'static str,
    pub set: bool,
}

pub fn format_snapshot(snapshot: &EnvSnapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(snapshot
            .entries()
            .iter()
            .map(|(name, value)| format!("{}={}\n", name, value))
            .collect()),
        OutputFormat::Json => to_json(snapshot),
    }
}

pub fn format_var_status(statuses: &[VarStatus], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for status in statuses {
                let state = if status.set { "set" } else { "empty" };
                out.push_str(&format!("{:<24}{}\n", status.name, state));
            }
            let empty = statuses.iter().filter(|s| !s.set).count();
            out.push_str(&format!(
                "{} of {} variables are empty\n",
                empty,
                statuses.len()
            ));
            Ok(out)
        }
        OutputFormat::Json => to_json(statuses),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}
