//! Configuration loader for the `.env` file and environment variables.
//!
//! Responsibilities:
//! - Merge the `.env` file into the process environment.
//! - Copy the recognized variables into an [`crate::EnvConfig`].
//! - Cache the record for the lifetime of a [`ConfigProvider`].
//!
//! Does NOT handle:
//! - Validating value formats or reloading after the first load.
//! - Terminating the process. Failures are returned to the caller.
//!
//! Invariants / Assumptions:
//! - Variables already present in the process environment win over `.env` values.
//! - A missing, unreadable, or malformed `.env` file is an error.
//! - The `DOTENV_DISABLED` variable is checked before the file is opened.

mod builder;
mod env;
mod error;
mod provider;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_empty;
pub use error::{ConfigError, EnvFileError};
pub use provider::ConfigProvider;
