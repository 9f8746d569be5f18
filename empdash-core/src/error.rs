//! Structured error types for empdash-core.
//!
//! The binary (empdash-cli) wraps these with `anyhow` context; library
//! consumers get matchable variants.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// I/O operation failed (surface writes, config reads)
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A configuration value could not be interpreted
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::config("EMPDASH_DB_PORT must be a port number, got 'abc'");
        assert_eq!(
            err.to_string(),
            "Configuration error: EMPDASH_DB_PORT must be a port number, got 'abc'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: DashError = io_err.into();

        assert!(matches!(err, DashError::Io { .. }));
    }
}
