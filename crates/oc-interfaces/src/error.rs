//! Error types for the interfaces model.
//!
//! Building a tree from typed values cannot fail; these errors come from
//! decoding documents and from [`crate::Interfaces::validate`].

use oc_types::{IpAddress, ParseError, VlanId};
use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while decoding, validating or rendering a tree.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Interface list key differs from `config/name`.
    #[error("Interface key '{key}' does not match config name '{name}'")]
    InterfaceKeyMismatch {
        /// The list key.
        key: String,
        /// The `config/name` leaf.
        name: String,
    },

    /// Subinterface list key differs from `config/index`.
    #[error("Subinterface key {key} on '{interface}' does not match config index {index}")]
    SubinterfaceKeyMismatch {
        /// The parent interface name.
        interface: String,
        /// The list key.
        key: u32,
        /// The `config/index` leaf.
        index: u32,
    },

    /// Address list key differs from `config/ip`.
    #[error(
        "{} address key {key} on '{interface}' subinterface {index} does not match config ip {ip}",
        .key.family()
    )]
    AddressKeyMismatch {
        /// The parent interface name.
        interface: String,
        /// The parent subinterface index.
        index: u32,
        /// The list key.
        key: IpAddress,
        /// The `config/ip` leaf.
        ip: IpAddress,
    },

    /// Two subinterfaces of one interface match the same VLAN.
    #[error("VLAN {vlan} on '{interface}' is matched by subinterfaces {first} and {second}")]
    DuplicateVlanMatch {
        /// The parent interface name.
        interface: String,
        /// The VLAN matched twice.
        vlan: VlanId,
        /// The lower subinterface index.
        first: u32,
        /// The higher subinterface index.
        second: u32,
    },

    /// Unknown document format name.
    #[error("Unsupported format '{0}' (expected json or yaml)")]
    UnsupportedFormat(String),

    /// Leaf value failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ModelError {
    /// Creates an interface key mismatch error.
    pub fn interface_key_mismatch(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InterfaceKeyMismatch {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Returns true if the error was raised while decoding a document
    /// rather than by validating a decoded tree.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ModelError::Json(_) | ModelError::Yaml(_) | ModelError::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = ModelError::interface_key_mismatch("g0/0/0", "g0/0/1");
        assert_eq!(
            err.to_string(),
            "Interface key 'g0/0/0' does not match config name 'g0/0/1'"
        );
    }

    #[test]
    fn test_duplicate_vlan_display() {
        let err = ModelError::DuplicateVlanMatch {
            interface: "g0/0/0".to_string(),
            vlan: VlanId::new(1042).unwrap(),
            first: 1042,
            second: 2042,
        };
        assert_eq!(
            err.to_string(),
            "VLAN 1042 on 'g0/0/0' is matched by subinterfaces 1042 and 2042"
        );
    }

    #[test]
    fn test_address_mismatch_names_family() {
        let err = ModelError::AddressKeyMismatch {
            interface: "g0/0/0".to_string(),
            index: 1042,
            key: "2001:db8::1".parse().unwrap(),
            ip: "2001:db8::2".parse().unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "ipv6 address key 2001:db8::1 on 'g0/0/0' subinterface 1042 does not match config ip 2001:db8::2"
        );
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: ModelError = ParseError::InvalidVlanId(0).into();
        assert_eq!(err.to_string(), "invalid VLAN ID: 0 (must be 1-4094)");
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_is_decode_error() {
        assert!(!ModelError::UnsupportedFormat("xml".to_string()).is_decode_error());
        assert!(!ModelError::interface_key_mismatch("a", "b").is_decode_error());
    }
}
