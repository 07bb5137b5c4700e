//! Configuration record types.
//!
//! Responsibilities:
//! - Define [`EnvConfig`], the immutable record built from the environment.
//! - Provide a serializable [`EnvSnapshot`] with secrets redacted on request.
//!
//! Does NOT handle:
//! - Reading the environment or the `.env` file (see `loader`).
//! - Validating value formats. Every field is an opaque string.
//!
//! Invariants:
//! - Secret fields use `secrecy::SecretString` so `Debug` never prints them.
//! - Values are stored exactly as read: no trimming, empty when unset.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::constants::{
    ADMIN_ADDRESS_VAR, GAME_CONTRACT_ADDRESS_VAR, OPEN_AI_KEY_VAR, PRIVATE_KEY_VAR, REDACTED,
    RPC_URL_VAR,
};

/// Settings read from the process environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// OpenAI API key.
    pub open_ai_key: SecretString,
    /// JSON-RPC endpoint of the chain node.
    pub rpc_url: String,
    /// Signing key for on-chain transactions.
    pub private_key: SecretString,
    /// Address of the deployed game contract.
    pub game_contract_address: String,
    /// Administrative account address.
    pub admin_address: String,
}

impl PartialEq for EnvConfig {
    fn eq(&self, other: &Self) -> bool {
        self.open_ai_key.expose_secret() == other.open_ai_key.expose_secret()
            && self.rpc_url == other.rpc_url
            && self.private_key.expose_secret() == other.private_key.expose_secret()
            && self.game_contract_address == other.game_contract_address
            && self.admin_address == other.admin_address
    }
}

impl Eq for EnvConfig {}

impl EnvConfig {
    /// Names of the variables whose value is empty, in field order.
    ///
    /// An empty field is not an error; this exists for reporting only.
    pub fn empty_vars(&self) -> Vec<&'static str> {
        self.snapshot(true)
            .entries()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Copy the record into plain strings.
    ///
    /// Non-empty secrets are replaced by [`REDACTED`] unless `reveal_secrets`
    /// is set. Empty secrets stay empty so an unset key is still visible.
    pub fn snapshot(&self, reveal_secrets: bool) -> EnvSnapshot {
        let secret = |value: &SecretString| {
            let exposed = value.expose_secret();
            if reveal_secrets || exposed.is_empty() {
                exposed.to_string()
            } else {
                REDACTED.to_string()
            }
        };

        EnvSnapshot {
            open_ai_key: secret(&self.open_ai_key),
            rpc_url: self.rpc_url.clone(),
            private_key: secret(&self.private_key),
            game_contract_address: self.game_contract_address.clone(),
            admin_address: self.admin_address.clone(),
        }
    }
}

/// Printable copy of an [`EnvConfig`], keyed by variable name when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvSnapshot {
    pub open_ai_key: String,
    pub rpc_url: String,
    pub private_key: String,
    pub game_contract_address: String,
    pub admin_address: String,
}

impl EnvSnapshot {
    /// `(variable, value)` pairs in field order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            (OPEN_AI_KEY_VAR, self.open_ai_key.as_str()),
            (RPC_URL_VAR, self.rpc_url.as_str()),
            (PRIVATE_KEY_VAR, self.private_key.as_str()),
            (GAME_CONTRACT_ADDRESS_VAR, self.game_contract_address.as_str()),
            (ADMIN_ADDRESS_VAR, self.admin_address.as_str()),
        ]
    }
}
