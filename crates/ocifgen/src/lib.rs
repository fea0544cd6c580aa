//! ocifgen - OpenConfig PE interface snapshot tool
//!
//! ocifgen renders the PE interface set built by
//! [`oc_interfaces::pe_interfaces`] and checks stored documents against it:
//!
//! - `show`: render the snapshot as RFC 7951 JSON or YAML
//! - `check`: decode a document, validate it, diff it against the snapshot
//!
//! Defaults come from an optional TOML file (see [`config`]); command line
//! flags override it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Args, Command, Status};
pub use commands::{CheckOutcome, Difference, DifferenceKind};
pub use config::{LoggingConfig, OcifgenConfig, OutputConfig, DEFAULT_CONFIG_PATH};
pub use error::{ConfigError, ConfigResult};
