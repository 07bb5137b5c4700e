//! Environment variable reading for configuration.
//!
//! Responsibilities:
//! - Read the recognized variables and apply them to a ConfigLoader instance.
//! - Provide a helper that reads a variable as a string, empty when unset.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//! - Building the final EnvConfig (see builder.rs).
//!
//! Invariants:
//! - Unset variables yield empty strings. This is never an error.
//! - Values are copied verbatim; whitespace is preserved.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{
    ADMIN_ADDRESS_VAR, GAME_CONTRACT_ADDRESS_VAR, OPEN_AI_KEY_VAR, PRIVATE_KEY_VAR, RPC_URL_VAR,
};

/// Read an environment variable, returning an empty string if unset.
///
/// A value that is not valid unicode is converted lossily.
pub fn env_var_or_empty(key: &str) -> String {
    match std::env::var_os(key) {
        Some(value) => value.into_string().unwrap_or_else(|raw| {
            tracing::warn!(var = key, "value is not valid unicode; converting lossily");
            raw.to_string_lossy().into_owned()
        }),
        None => {
            tracing::debug!(var = key, "environment variable unset; using empty string");
            String::new()
        }
    }
}

/// Apply environment variable values to the loader.
pub fn apply_env(loader: &mut ConfigLoader) {
    loader.set_open_ai_key(SecretString::new(env_var_or_empty(OPEN_AI_KEY_VAR).into()));
    loader.set_rpc_url(env_var_or_empty(RPC_URL_VAR));
    loader.set_private_key(SecretString::new(env_var_or_empty(PRIVATE_KEY_VAR).into()));
    loader.set_game_contract_address(env_var_or_empty(GAME_CONTRACT_ADDRESS_VAR));
    loader.set_admin_address(env_var_or_empty(ADMIN_ADDRESS_VAR));
}
