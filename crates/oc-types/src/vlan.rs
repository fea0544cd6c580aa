//! `oc-vlan-types:vlan-id`.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// An 802.1Q VLAN identifier in `1..=4094`.
///
/// 0 (priority tagged) and 4095 are reserved and never representable.
/// Encodes as a bare integer.
///
/// ```
/// use oc_types::VlanId;
///
/// let pink = VlanId::new(1042).unwrap();
/// assert_eq!(u32::from(pink), 1042);
/// assert!(VlanId::new(4095).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    /// Assignable VLAN ids.
    pub const RANGE: RangeInclusive<u16> = 1..=4094;

    /// Const-context constructor; `None` when `id` is reserved.
    pub const fn checked(id: u16) -> Option<Self> {
        if id >= *Self::RANGE.start() && id <= *Self::RANGE.end() {
            Some(VlanId(id))
        } else {
            None
        }
    }

    /// Creates a VLAN id.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidVlanId`] when `id` is outside [`VlanId::RANGE`].
    pub fn new(id: u16) -> Result<Self, ParseError> {
        Self::checked(id).ok_or(ParseError::InvalidVlanId(id))
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VlanId {
    type Err = ParseError;

    /// Parses the decimal leaf value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u16>()
            .map_err(|_| ParseError::MalformedVlanId(s.to_string()))?;
        VlanId::new(id)
    }
}

impl TryFrom<u16> for VlanId {
    type Error = ParseError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        VlanId::new(id)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> u16 {
        vlan.0
    }
}

/// Subinterface indices are `u32`; VLAN-per-subinterface layouts reuse the id.
impl From<VlanId> for u32 {
    fn from(vlan: VlanId) -> u32 {
        u32::from(vlan.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_range_bounds() {
        assert_eq!(VlanId::new(1).map(u16::from), Ok(1));
        assert_eq!(VlanId::new(4094).map(u16::from), Ok(4094));
        assert_eq!(VlanId::new(0), Err(ParseError::InvalidVlanId(0)));
        assert_eq!(VlanId::new(4095), Err(ParseError::InvalidVlanId(4095)));
    }

    #[test]
    fn test_checked_in_const() {
        const BLUE: Option<VlanId> = VlanId::checked(1400);
        assert_eq!(BLUE.map(|v| v.as_u16()), Some(1400));
        assert_eq!(VlanId::checked(4095), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1500".parse::<VlanId>().unwrap().as_u16(), 1500);
        assert_eq!(" 1042 ".parse::<VlanId>().unwrap().as_u16(), 1042);
        assert_eq!("4095".parse::<VlanId>(), Err(ParseError::InvalidVlanId(4095)));
    }

    #[test]
    fn test_from_str_names_malformed_input() {
        assert_eq!(
            "70000".parse::<VlanId>(),
            Err(ParseError::MalformedVlanId("70000".to_string()))
        );
        assert_eq!(
            "vlan100".parse::<VlanId>(),
            Err(ParseError::MalformedVlanId("vlan100".to_string()))
        );
        let err = "".parse::<VlanId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid VLAN ID: '' (expected an integer 1-4094)");
    }

    #[test]
    fn test_widening_to_index() {
        let cyan = VlanId::new(1500).unwrap();
        assert_eq!(u32::from(cyan), 1500);
        assert_eq!(cyan.to_string(), "1500");
    }

    #[test]
    fn test_serde_bare_integer() {
        let vlan = VlanId::new(1042).unwrap();
        assert_eq!(serde_json::to_string(&vlan).unwrap(), "1042");
        assert_eq!(serde_json::from_str::<VlanId>("1042").unwrap(), vlan);
        assert!(serde_json::from_str::<VlanId>("4095").is_err());
        assert!(serde_json::from_str::<VlanId>("0").is_err());
    }
}
