//! Error types for ocifgen configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        /// The config file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML or has wrong value types.
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        /// The config file path.
        path: PathBuf,
        /// The TOML decoding error.
        #[source]
        source: toml::de::Error,
    },

    /// Config value failed validation.
    #[error("Invalid configuration for {field}: {message}")]
    Invalid {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
