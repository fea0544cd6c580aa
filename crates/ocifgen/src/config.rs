//! Configuration file support for ocifgen
//!
//! Loads and validates ocifgen defaults from a TOML file.
//! Default location: /etc/ocifgen/ocifgen.toml
//!
//! ```toml
//! [output]
//! format = "yaml"
//! pretty = true
//!
//! [logging]
//! level = "debug"
//! ```

use crate::error::{ConfigError, ConfigResult};
use oc_interfaces::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/ocifgen/ocifgen.toml";

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Document format for `show`
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off); `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Complete ocifgen configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcifgenConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Parses a log level name, reporting failures against `field`.
pub fn parse_level(field: &str, level: &str) -> ConfigResult<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| ConfigError::invalid(field, format!("unknown level '{}'", level)))
}

impl OcifgenConfig {
    /// Load configuration from `path`. The file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from default location or defaults
    pub fn load() -> ConfigResult<Self> {
        Self::load_or_default(DEFAULT_CONFIG_PATH)
    }

    fn parse(path: &Path, content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> ConfigResult<LevelFilter> {
        parse_level("logging.level", &self.logging.level)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.log_level()?;
        Ok(())
    }
}
