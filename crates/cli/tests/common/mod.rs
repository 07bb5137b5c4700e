//! Shared test utilities for game-env integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a temp directory.
//! - Write `.env` files for a test.
//!
//! Invariants / Assumptions:
//! - Every recognized variable, `DOTENV_DISABLED`, and `RUST_LOG` is cleared
//!   from the child environment, so only what a test sets or writes is visible.

use assert_cmd::Command;
use game_config::constants::{CONFIG_VARS, DOTENV_DISABLED_VAR};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Five-variable `.env` used by most tests.
#[allow(dead_code)]
pub const FULL_ENV: &str = "OPEN_AI_KEY=sk-abc\nRPC_URL=http://localhost:8545\nPRIVATE_KEY=0xdead\nGAME_CONTRACT_ADDRESS=0x1\nADMIN_ADDRESS=0x2\n";

/// Returns a hermetic `game-env` command running in `dir`.
pub fn game_env_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("game-env");
    cmd.current_dir(dir);

    for key in CONFIG_VARS {
        cmd.env_remove(key);
    }
    cmd.env_remove(DOTENV_DISABLED_VAR).env_remove("RUST_LOG");

    cmd
}

/// Creates a temp directory containing `.env` with `contents`.
#[allow(dead_code)]
pub fn dir_with_env(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), contents).unwrap();
    temp_dir
}
