//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges `.env` and reads the environment.
//! - Build the final `EnvConfig` from the values read.
//!
//! Does NOT handle:
//! - Direct environment variable reading (delegated to env.rs).
//! - Caching the built record (see provider.rs).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` never overrides a variable already set in the process environment.
//! - `load_dotenv()` fails on a missing file unless `DOTENV_DISABLED` is set.
//! - Fields never read by `from_env()` build as empty strings.

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::{ConfigError, EnvFileError};
use crate::constants::{DEFAULT_ENV_FILE, DOTENV_DISABLED_VAR};
use crate::types::EnvConfig;

/// Configuration loader that builds an [`EnvConfig`] from `.env` and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: PathBuf,
    open_ai_key: Option<SecretString>,
    rpc_url: Option<String>,
    private_key: Option<SecretString>,
    game_contract_address: Option<String>,
    admin_address: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader reading `.env` from the working directory.
    pub fn new() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            open_ai_key: None,
            rpc_url: None,
            private_key: None,
            game_contract_address: None,
            admin_address: None,
        }
    }

    /// Override the environment file path (primarily for testing).
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    /// Path of the environment file this loader reads.
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Merge the environment file into the process environment.
    ///
    /// The whole file is parsed before any variable is set, so a failed load
    /// leaves the environment untouched. Variables already present in the
    /// process environment keep their value.
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not opened.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if the file is missing, unreadable, or
    /// has invalid syntax. Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("{} is set; skipping .env loading", DOTENV_DISABLED_VAR);
            return Ok(self);
        }

        tracing::debug!(path = %self.env_file.display(), "loading environment file");
        let to_error = |e| EnvFileError::from_dotenv(&self.env_file, e);
        let pairs = dotenvy::from_path_iter(&self.env_file)
            .map_err(to_error)?
            .collect::<Result<Vec<(String, String)>, _>>()
            .map_err(to_error)?;

        for (key, value) in pairs {
            if std::env::var_os(&key).is_some() {
                tracing::debug!(var = %key, "already set in environment; keeping existing value");
                continue;
            }
            // SAFETY: configuration is loaded before the program starts the
            // threads that read the environment.
            unsafe { std::env::set_var(&key, value) };
        }
        Ok(self)
    }

    /// Read the recognized variables from the process environment.
    ///
    /// Unset variables read as empty strings.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Merge `.env`, read the environment, and build the record.
    pub fn load(self) -> Result<EnvConfig, ConfigError> {
        Ok(self.load_dotenv()?.from_env().build())
    }

    /// Build the final record.
    pub fn build(self) -> EnvConfig {
        let secret = |value: Option<SecretString>| {
            value.unwrap_or_else(|| SecretString::new(String::new().into()))
        };

        EnvConfig {
            open_ai_key: secret(self.open_ai_key),
            rpc_url: self.rpc_url.unwrap_or_default(),
            private_key: secret(self.private_key),
            game_contract_address: self.game_contract_address.unwrap_or_default(),
            admin_address: self.admin_address.unwrap_or_default(),
        }
    }

    pub(super) fn set_open_ai_key(&mut self, value: SecretString) {
        self.open_ai_key = Some(value);
    }

    pub(super) fn set_rpc_url(&mut self, value: String) {
        self.rpc_url = Some(value);
    }

    pub(super) fn set_private_key(&mut self, value: SecretString) {
        self.private_key = Some(value);
    }

    pub(super) fn set_game_contract_address(&mut self, value: String) {
        self.game_contract_address = Some(value);
    }

    pub(super) fn set_admin_address(&mut self, value: String) {
        self.admin_address = Some(value);
    }
}
