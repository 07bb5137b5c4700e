//! Environment configuration for the game backend.
//!
//! This crate loads the backend's settings from a `.env` file and the
//! process environment into a typed record, and caches that record for the
//! lifetime of a [`ConfigProvider`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, ConfigProvider, EnvFileError, env_var_or_empty};
pub use types::{EnvConfig, EnvSnapshot};
