//! Load-once configuration provider.
//!
//! Responsibilities:
//! - Run a `ConfigLoader` on first access and cache the resulting `EnvConfig`.
//! - Hand out the cached record on every later access.
//!
//! Does NOT handle:
//! - Reloading. Changes to `.env` or the environment after the first load are ignored.
//! - Process termination on failure (the binary decides that).
//!
//! Invariants:
//! - The record transitions from unloaded to loaded at most once and never changes after.
//! - Concurrent first accesses serialize on `init`; the loader runs once per successful load.
//! - A failed load caches nothing, so the provider stays unloaded.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::EnvConfig;

/// Owns the cached configuration record.
///
/// Construct one at process start and pass it by reference to whatever
/// needs configuration.
#[derive(Debug)]
pub struct ConfigProvider {
    loader: ConfigLoader,
    record: OnceLock<EnvConfig>,
    init: Mutex<()>,
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider {
    /// Provider backed by the default loader (`.env` in the working directory).
    pub fn new() -> Self {
        Self::with_loader(ConfigLoader::new())
    }

    /// Provider backed by a custom loader.
    pub fn with_loader(loader: ConfigLoader) -> Self {
        Self {
            loader,
            record: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Return the cached record, loading it first if needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` when the first load cannot read the
    /// environment file. Once a load succeeds this never fails.
    pub fn get(&self) -> Result<&EnvConfig, ConfigError> {
        if let Some(config) = self.record.get() {
            return Ok(config);
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = self.record.get() {
            return Ok(config);
        }

        let config = self.loader.clone().load()?;
        tracing::info!(
            env_file = %self.loader.env_file().display(),
            empty_vars = ?config.empty_vars(),
            "configuration loaded"
        );
        Ok(self.record.get_or_init(|| config))
    }

    /// Whether a record has been cached.
    pub fn is_loaded(&self) -> bool {
        self.record.get().is_some()
    }
}
