//! Validated OpenConfig primitive types.
//!
//! This crate provides type-safe representations of the leaf types used by
//! the OpenConfig interfaces, IP and VLAN models:
//!
//! - [`VlanId`]: IEEE 802.1Q VLAN identifiers (`oc-vlan-types:vlan-id`)
//! - [`Ipv4Address`], [`Ipv6Address`], [`IpAddress`]: `oc-inet` addresses
//! - [`PrefixLength`]: bounded prefix lengths, per [`AddressFamily`]
//! - [`InterfaceType`]: `openconfig-if-types` interface identities

mod if_type;
mod ip;
mod vlan;

pub use if_type::InterfaceType;
pub use ip::{
    AddressFamily, IpAddress, Ipv4Address, Ipv4PrefixLength, Ipv6Address, Ipv6PrefixLength,
    PrefixLength,
};
pub use vlan::VlanId;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid prefix length: {len} (must be 0-{max})")]
    InvalidPrefixLength { len: u8, max: u8 },

    #[error("invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(u16),

    #[error("invalid VLAN ID: '{0}' (expected an integer 1-4094)")]
    MalformedVlanId(String),

    #[error("invalid interface type: {0}")]
    InvalidInterfaceType(String),
}
