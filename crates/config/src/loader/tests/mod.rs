//! Tests for the configuration loader and provider.
//!
//! Responsibilities:
//! - Test `.env` loading, its failure modes, and the `DOTENV_DISABLED` bypass.
//! - Test reading the recognized variables and their precedence over `.env`.
//! - Test the load-once caching of `ConfigProvider`.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every test runs inside `with_clean_env`, which restores the recognized
//!   variables afterwards, including ones set by `.env` loading.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

use crate::constants::{CONFIG_VARS, DOTENV_DISABLED_VAR};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every recognized variable and `DOTENV_DISABLED` unset,
/// except for the `overrides` given.
pub fn with_clean_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let mut vars: Vec<(&str, Option<&str>)> = CONFIG_VARS
        .iter()
        .chain(std::iter::once(&DOTENV_DISABLED_VAR))
        .map(|key| (*key, None))
        .collect();
    for (key, value) in overrides {
        match vars.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = Some(*value),
            None => vars.push((*key, Some(*value))),
        }
    }

    temp_env::with_vars(vars, f);
}

/// Write `contents` to `.env` inside a fresh temp directory.
pub fn write_env_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
