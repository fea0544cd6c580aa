//! RFC 7951 document encoding.
//!
//! A document wraps the tree in its module-qualified top-level member:
//!
//! ```json
//! {"openconfig-interfaces:interfaces": {"interface": [ ... ]}}
//! ```
//!
//! YAML uses the same structure. Decoding is strict: the top-level member
//! is required, unknown members are rejected at every level, and the tree
//! is validated before it is returned.

use crate::error::{ModelError, ModelResult};
use crate::interface::Interfaces;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Top-level member name of an interfaces document.
pub const INTERFACES_MEMBER: &str = "openconfig-interfaces:interfaces";

#[derive(Serialize)]
struct DocumentRef<'a> {
    #[serde(rename = "openconfig-interfaces:interfaces")]
    interfaces: &'a Interfaces,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(rename = "openconfig-interfaces:interfaces")]
    interfaces: Interfaces,
}

/// Document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// RFC 7951 JSON (default).
    #[default]
    Json,
    /// YAML with the same structure as the JSON encoding.
    Yaml,
}

impl OutputFormat {
    /// Infers the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(OutputFormat::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(OutputFormat::Yaml)
        } else {
            None
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(ModelError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Encodes `interfaces` as an RFC 7951 JSON document.
pub fn to_json(interfaces: &Interfaces, pretty: bool) -> ModelResult<String> {
    let document = DocumentRef { interfaces };
    let encoded = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(encoded)
}

/// Encodes `interfaces` as a YAML document.
pub fn to_yaml(interfaces: &Interfaces) -> ModelResult<String> {
    Ok(serde_yaml::to_string(&DocumentRef { interfaces })?)
}

/// Encodes `interfaces` in `format`. `pretty` only affects JSON.
pub fn render(interfaces: &Interfaces, format: OutputFormat, pretty: bool) -> ModelResult<String> {
    debug!(%format, pretty, interfaces = interfaces.len(), "Rendering interfaces");
    match format {
        OutputFormat::Json => to_json(interfaces, pretty),
        OutputFormat::Yaml => to_yaml(interfaces),
    }
}

/// Decodes and validates an RFC 7951 JSON document.
pub fn from_json(input: &str) -> ModelResult<Interfaces> {
    let document: Document = serde_json::from_str(input)?;
    document.interfaces.validate()?;
    Ok(document.interfaces)
}

/// Decodes and validates a YAML document.
pub fn from_yaml(input: &str) -> ModelResult<Interfaces> {
    let document: Document = serde_yaml::from_str(input)?;
    document.interfaces.validate()?;
    Ok(document.interfaces)
}

/// Decodes and validates a document in `format`.
pub fn parse(input: &str, format: OutputFormat) -> ModelResult<Interfaces> {
    match format {
        OutputFormat::Json => from_json(input),
        OutputFormat::Yaml => from_yaml(input),
    }
}
