//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the single failure kind of the loader: the environment source is unavailable.
//! - Convert `dotenvy` errors into variants that carry no file contents.
//!
//! Invariants:
//! - `ConfigError` displays as `Error loading .env file: <cause>`.
//! - Errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The environment file could not be located, read, or parsed.
    ///
    /// The cause is rendered in the message and is not exposed as `source()`.
    #[error("Error loading .env file: {0}")]
    EnvFile(EnvFileError),
}

impl From<EnvFileError> for ConfigError {
    fn from(error: EnvFileError) -> Self {
        ConfigError::EnvFile(error)
    }
}

/// Why the environment file could not be loaded.
#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("open {}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },

    #[error("read {}: {kind}", .path.display())]
    Io { path: PathBuf, kind: ErrorKind },

    /// SAFETY: only the byte index of the failure is kept, never the line.
    #[error(
        "parse {}: invalid syntax at position {index}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    Parse { path: PathBuf, index: usize },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("load {}: unrecognized dotenv error", .path.display())]
    Unknown { path: PathBuf },
}

impl EnvFileError {
    pub(crate) fn from_dotenv(path: &Path, err: dotenvy::Error) -> Self {
        let path = path.to_path_buf();
        match err {
            dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound => {
                EnvFileError::NotFound { path }
            }
            dotenvy::Error::Io(io_err) => EnvFileError::Io {
                path,
                kind: io_err.kind(),
            },
            dotenvy::Error::LineParse(_, index) => EnvFileError::Parse { path, index },
            _ => EnvFileError::Unknown { path },
        }
    }

    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            EnvFileError::NotFound { path }
            | EnvFileError::Io { path, .. }
            | EnvFileError::Parse { path, .. }
            | EnvFileError::Unknown { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_from_io_error() {
        let err = dotenvy::Error::Io(std::io::Error::from(ErrorKind::NotFound));
        let mapped = EnvFileError::from_dotenv(Path::new(".env"), err);

        assert!(matches!(mapped, EnvFileError::NotFound { .. }));
        assert_eq!(mapped.path(), Path::new(".env"));
    }

    #[test]
    fn test_other_io_errors_keep_kind() {
        let err = dotenvy::Error::Io(std::io::Error::from(ErrorKind::PermissionDenied));
        let mapped = EnvFileError::from_dotenv(Path::new(".env"), err);

        match mapped {
            EnvFileError::Io { kind, .. } => assert_eq!(kind, ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_line_parse_drops_line_contents() {
        let err = dotenvy::Error::LineParse("SECRET=abc def'".to_string(), 7);
        let mapped = EnvFileError::from_dotenv(Path::new(".env"), err);
        let message = ConfigError::from(mapped).to_string();

        assert!(message.starts_with("Error loading .env file: "), "{message}");
        assert!(message.contains("position 7"), "{message}");
        assert!(!message.contains("SECRET=abc"), "{message}");
    }

    #[test]
    fn test_config_error_has_no_source() {
        use std::error::Error as _;

        let err = ConfigError::from(EnvFileError::NotFound {
            path: PathBuf::from(".env"),
        });

        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "Error loading .env file: open .env: no such file or directory"
        );
    }
}
