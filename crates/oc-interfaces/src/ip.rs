//! `openconfig-if-ip` subinterface augmentations.
//!
//! Each address family carries a keyed address list:
//!
//! ```text
//! ipv4/addresses/address[ip]/config/{ip,prefix-length}
//! ipv6/addresses/address[ip]/config/{ip,prefix-length}
//! ```

use crate::keyed::{collect_keyed, keyed_list, Keyed};
use oc_types::{Ipv4Address, Ipv4PrefixLength, Ipv6Address, Ipv6PrefixLength};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IPv4 container attached to a subinterface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ipv4 {
    #[serde(default, skip_serializing_if = "Ipv4Addresses::is_empty")]
    pub(crate) addresses: Ipv4Addresses,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Ipv4Addresses {
    #[serde(default, with = "keyed_list")]
    pub(crate) address: BTreeMap<Ipv4Address, Ipv4AddressEntry>,
}

impl Ipv4Addresses {
    fn is_empty(&self) -> bool {
        self.address.is_empty()
    }
}

impl Ipv4 {
    /// Returns the address entry keyed by `ip`.
    pub fn address(&self, ip: &Ipv4Address) -> Option<&Ipv4AddressEntry> {
        self.addresses.address.get(ip)
    }

    /// Iterates addresses in key order.
    pub fn addresses(&self) -> impl Iterator<Item = &Ipv4AddressEntry> {
        self.addresses.address.values()
    }

    pub fn len(&self) -> usize {
        self.addresses.address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromIterator<Ipv4AddressEntry> for Ipv4 {
    fn from_iter<I: IntoIterator<Item = Ipv4AddressEntry>>(iter: I) -> Self {
        Self {
            addresses: Ipv4Addresses {
                address: collect_keyed(iter),
            },
        }
    }
}

/// An IPv4 address list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ipv4AddressEntry {
    pub(crate) ip: Ipv4Address,
    pub(crate) config: Ipv4AddressConfig,
}

/// IPv4 address configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct Ipv4AddressConfig {
    pub(crate) ip: Ipv4Address,
    pub(crate) prefix_length: Ipv4PrefixLength,
}

impl Ipv4AddressEntry {
    /// Creates an entry whose key and `config/ip` are both `ip`.
    pub const fn new(ip: Ipv4Address, prefix_length: Ipv4PrefixLength) -> Self {
        Self {
            ip,
            config: Ipv4AddressConfig { ip, prefix_length },
        }
    }

    /// Returns the list key.
    pub fn ip(&self) -> Ipv4Address {
        self.ip
    }

    pub fn config(&self) -> &Ipv4AddressConfig {
        &self.config
    }

    pub fn prefix_length(&self) -> Ipv4PrefixLength {
        self.config.prefix_length
    }
}

impl Ipv4AddressConfig {
    pub fn ip(&self) -> Ipv4Address {
        self.ip
    }

    pub fn prefix_length(&self) -> Ipv4PrefixLength {
        self.prefix_length
    }
}

impl Keyed for Ipv4AddressEntry {
    type Key = Ipv4Address;

    fn key(&self) -> Ipv4Address {
        self.ip
    }
}

/// IPv6 container attached to a subinterface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ipv6 {
    #[serde(default, skip_serializing_if = "Ipv6Addresses::is_empty")]
    pub(crate) addresses: Ipv6Addresses,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Ipv6Addresses {
    #[serde(default, with = "keyed_list")]
    pub(crate) address: BTreeMap<Ipv6Address, Ipv6AddressEntry>,
}

impl Ipv6Addresses {
    fn is_empty(&self) -> bool {
        self.address.is_empty()
    }
}

impl Ipv6 {
    /// Returns the address entry keyed by `ip`.
    pub fn address(&self, ip: &Ipv6Address) -> Option<&Ipv6AddressEntry> {
        self.addresses.address.get(ip)
    }

    /// Iterates addresses in key order.
    pub fn addresses(&self) -> impl Iterator<Item = &Ipv6AddressEntry> {
        self.addresses.address.values()
    }

    pub fn len(&self) -> usize {
        self.addresses.address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromIterator<Ipv6AddressEntry> for Ipv6 {
    fn from_iter<I: IntoIterator<Item = Ipv6AddressEntry>>(iter: I) -> Self {
        Self {
            addresses: Ipv6Addresses {
                address: collect_keyed(iter),
            },
        }
    }
}

/// An IPv6 address list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ipv6AddressEntry {
    pub(crate) ip: Ipv6Address,
    pub(crate) config: Ipv6AddressConfig,
}

/// IPv6 address configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct Ipv6AddressConfig {
    pub(crate) ip: Ipv6Address,
    pub(crate) prefix_length: Ipv6PrefixLength,
}

impl Ipv6AddressEntry {
    /// Creates an entry whose key and `config/ip` are both `ip`.
    pub const fn new(ip: Ipv6Address, prefix_length: Ipv6PrefixLength) -> Self {
        Self {
            ip,
            config: Ipv6AddressConfig { ip, prefix_length },
        }
    }

    /// Returns the list key.
    pub fn ip(&self) -> Ipv6Address {
        self.ip
    }

    pub fn config(&self) -> &Ipv6AddressConfig {
        &self.config
    }

    pub fn prefix_length(&self) -> Ipv6PrefixLength {
        self.config.prefix_length
    }
}

impl Ipv6AddressConfig {
    pub fn ip(&self) -> Ipv6Address {
        self.ip
    }

    pub fn prefix_length(&self) -> Ipv6PrefixLength {
        self.prefix_length
    }
}

impl Keyed for Ipv6AddressEntry {
    type Key = Ipv6Address;

    fn key(&self) -> Ipv6Address {
        self.ip
    }
}
