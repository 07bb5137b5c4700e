//! Centralized constants for the game-env workspace.
//!
//! Variable names live here so the loader, the CLI, and the tests agree on
//! a single spelling.

// =============================================================================
// Environment File
// =============================================================================

/// Environment file read from the process working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Setting this variable to `1` or `true` skips the environment file entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Recognized Variables
// =============================================================================

pub const OPEN_AI_KEY_VAR: &str = "OPEN_AI_KEY";
pub const RPC_URL_VAR: &str = "RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const GAME_CONTRACT_ADDRESS_VAR: &str = "GAME_CONTRACT_ADDRESS";
pub const ADMIN_ADDRESS_VAR: &str = "ADMIN_ADDRESS";

/// Every variable copied into [`crate::EnvConfig`], in field order.
pub const CONFIG_VARS: [&str; 5] = [
    OPEN_AI_KEY_VAR,
    RPC_URL_VAR,
    PRIVATE_KEY_VAR,
    GAME_CONTRACT_ADDRESS_VAR,
    ADMIN_ADDRESS_VAR,
];

// =============================================================================
// Display
// =============================================================================

/// Placeholder printed in place of a non-empty secret.
pub const REDACTED: &str = "[REDACTED]";
