//! `oc-inet` address leaves and the `prefix-length` leaf.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family of an [`IpAddress`] or address block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("ipv4"),
            AddressFamily::Ipv6 => f.write_str("ipv6"),
        }
    }
}

// Both leaves wrap the std type and encode as its canonical text.
macro_rules! address_leaf {
    ($(#[$doc:meta])* $name:ident($inner:ty)) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$inner>()
                    .map($name)
                    .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
            }
        }

        impl From<$inner> for $name {
            fn from(addr: $inner) -> Self {
                $name(addr)
            }
        }

        impl From<$name> for $inner {
            fn from(addr: $name) -> Self {
                addr.0
            }
        }
    };
}

address_leaf!(
    /// `oc-inet:ipv4-address`, e.g. `192.168.1.2`.
    Ipv4Address(Ipv4Addr)
);

address_leaf!(
    /// `oc-inet:ipv6-address`, rendered compressed, e.g. `2001:db8::1`.
    Ipv6Address(Ipv6Addr)
);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address(Ipv4Addr::new(a, b, c, d))
    }
}

impl Ipv6Address {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Ipv6Address(Ipv6Addr::new(a, b, c, d, e, f, g, h))
    }
}

/// Either address leaf; used where errors report keys of both families.
///
/// Orders all IPv4 addresses before IPv6 ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpAddress {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl IpAddress {
    pub const fn family(&self) -> AddressFamily {
        match self {
            IpAddress::V4(_) => AddressFamily::Ipv4,
            IpAddress::V6(_) => AddressFamily::Ipv6,
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::V4(addr) => addr.fmt(f),
            IpAddress::V6(addr) => addr.fmt(f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse().map(IpAddress::V6)
        } else {
            s.parse().map(IpAddress::V4)
        }
    }
}

impl From<Ipv4Address> for IpAddress {
    fn from(addr: Ipv4Address) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6Address> for IpAddress {
    fn from(addr: Ipv6Address) -> Self {
        IpAddress::V6(addr)
    }
}

/// A `prefix-length` leaf no wider than `MAX` bits.
///
/// Encodes as a bare integer; decoding rejects values above `MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PrefixLength<const MAX: u8>(u8);

/// `0..=32`
pub type Ipv4PrefixLength = PrefixLength<32>;

/// `0..=128`
pub type Ipv6PrefixLength = PrefixLength<128>;

impl<const MAX: u8> PrefixLength<MAX> {
    /// Const-context constructor; `None` when `len > MAX`.
    pub const fn checked(len: u8) -> Option<Self> {
        if len <= MAX {
            Some(PrefixLength(len))
        } else {
            None
        }
    }

    /// # Errors
    ///
    /// [`ParseError::InvalidPrefixLength`] when `len` exceeds `MAX`.
    pub fn new(len: u8) -> Result<Self, ParseError> {
        Self::checked(len).ok_or(ParseError::InvalidPrefixLength { len, max: MAX })
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl<const MAX: u8> fmt::Display for PrefixLength<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<const MAX: u8> TryFrom<u8> for PrefixLength<MAX> {
    type Error = ParseError;

    fn try_from(len: u8) -> Result<Self, Self::Error> {
        Self::new(len)
    }
}

impl<const MAX: u8> From<PrefixLength<MAX>> for u8 {
    fn from(len: PrefixLength<MAX>) -> u8 {
        len.0
    }
}
