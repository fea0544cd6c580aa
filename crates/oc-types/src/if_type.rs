//! OpenConfig interface type identities.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// YANG module that defines the interface type identities.
const IF_TYPES_MODULE: &str = "openconfig-if-types";

/// Interface type (`openconfig-if-types:OPENCONFIG_IF_TYPE` identities).
///
/// Serialized as the module-qualified identity name used by RFC 7951
/// identityref encoding, e.g. `openconfig-if-types:IF_ETHERNET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum InterfaceType {
    /// Ethernet interface.
    Ethernet,
    /// Aggregated (LAG) interface.
    Aggregate,
    /// Loopback interface.
    Loopback,
    /// Routed VLAN (SVI) interface.
    RoutedVlan,
    /// SONET/SDH interface.
    Sonet,
    /// GRE tunnel over IPv4.
    TunnelGre4,
    /// GRE tunnel over IPv6.
    TunnelGre6,
}

impl InterfaceType {
    /// Returns the bare identity name.
    pub const fn identity(&self) -> &'static str {
        match self {
            InterfaceType::Ethernet => "IF_ETHERNET",
            InterfaceType::Aggregate => "IF_AGGREGATE",
            InterfaceType::Loopback => "IF_LOOPBACK",
            InterfaceType::RoutedVlan => "IF_ROUTED_VLAN",
            InterfaceType::Sonet => "IF_SONET",
            InterfaceType::TunnelGre4 => "IF_TUNNEL_GRE4",
            InterfaceType::TunnelGre6 => "IF_TUNNEL_GRE6",
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", IF_TYPES_MODULE, self.identity())
    }
}

impl FromStr for InterfaceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both "openconfig-if-types:IF_ETHERNET" and "IF_ETHERNET"
        let identity = match s.split_once(':') {
            Some((IF_TYPES_MODULE, identity)) => identity,
            Some(_) => return Err(ParseError::InvalidInterfaceType(s.to_string())),
            None => s,
        };

        match identity {
            "IF_ETHERNET" => Ok(InterfaceType::Ethernet),
            "IF_AGGREGATE" => Ok(InterfaceType::Aggregate),
            "IF_LOOPBACK" => Ok(InterfaceType::Loopback),
            "IF_ROUTED_VLAN" => Ok(InterfaceType::RoutedVlan),
            "IF_SONET" => Ok(InterfaceType::Sonet),
            "IF_TUNNEL_GRE4" => Ok(InterfaceType::TunnelGre4),
            "IF_TUNNEL_GRE6" => Ok(InterfaceType::TunnelGre6),
            _ => Err(ParseError::InvalidInterfaceType(s.to_string())),
        }
    }
}

impl TryFrom<String> for InterfaceType {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InterfaceType> for String {
    fn from(if_type: InterfaceType) -> String {
        if_type.to_string()
    }
}
