//! Subinterfaces and their builder.

use crate::ip::{Ipv4, Ipv4AddressEntry, Ipv6, Ipv6AddressEntry};
use crate::keyed::Keyed;
use crate::vlan::Vlan;
use oc_types::{Ipv4Address, Ipv4PrefixLength, Ipv6Address, Ipv6PrefixLength, VlanId};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A logical subinterface, keyed by `index` within its parent interface.
///
/// The VLAN, IPv4 and IPv6 augmentations are independent optional facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subinterface {
    pub(crate) index: u32,
    pub(crate) config: SubinterfaceConfig,
    #[serde(
        rename = "openconfig-vlan:vlan",
        default,
        deserialize_with = "non_presence",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) vlan: Option<Vlan>,
    #[serde(
        rename = "openconfig-if-ip:ipv4",
        default,
        deserialize_with = "non_presence",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) ipv4: Option<Ipv4>,
    #[serde(
        rename = "openconfig-if-ip:ipv6",
        default,
        deserialize_with = "non_presence",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) ipv6: Option<Ipv6>,
}

// The facets are non-presence containers, so an empty one decodes as absent.
fn non_presence<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + PartialEq,
{
    Ok(Option::<T>::deserialize(deserializer)?.filter(|container| *container != T::default()))
}

/// Subinterface configuration leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubinterfaceConfig {
    pub(crate) index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: Option<bool>,
}

impl Subinterface {
    /// Returns the list key.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn config(&self) -> &SubinterfaceConfig {
        &self.config
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn vlan(&self) -> Option<&Vlan> {
        self.vlan.as_ref()
    }

    /// Returns the single-tagged VLAN id, if any.
    pub fn vlan_id(&self) -> Option<VlanId> {
        self.vlan.as_ref().and_then(Vlan::single_tagged_vlan_id)
    }

    pub fn ipv4(&self) -> Option<&Ipv4> {
        self.ipv4.as_ref()
    }

    pub fn ipv6(&self) -> Option<&Ipv6> {
        self.ipv6.as_ref()
    }

    /// Returns true if either address family carries an address.
    pub fn has_ip_addressing(&self) -> bool {
        self.ipv4.as_ref().is_some_and(|ipv4| !ipv4.is_empty())
            || self.ipv6.as_ref().is_some_and(|ipv6| !ipv6.is_empty())
    }
}

impl SubinterfaceConfig {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }
}

impl Keyed for Subinterface {
    type Key = u32;

    fn key(&self) -> u32 {
        self.index
    }
}

/// Builder for a single [`Subinterface`].
///
/// Each subinterface gets its own builder value; `build` consumes it.
///
/// ```
/// use oc_interfaces::{SubinterfaceBuilder, VlanId};
///
/// let sub = SubinterfaceBuilder::new(1400)
///     .description("blue VLAN instance in L2VSI")
///     .vlan(VlanId::new(1400).unwrap())
///     .build();
///
/// assert_eq!(sub.index(), 1400);
/// assert!(sub.ipv4().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubinterfaceBuilder {
    index: u32,
    description: Option<String>,
    enabled: Option<bool>,
    vlan: Option<VlanId>,
    ipv4: Vec<Ipv4AddressEntry>,
    ipv6: Vec<Ipv6AddressEntry>,
}

impl SubinterfaceBuilder {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets a single-tagged VLAN match.
    pub fn vlan(mut self, vlan_id: VlanId) -> Self {
        self.vlan = Some(vlan_id);
        self
    }

    /// Adds an IPv4 address. A repeated address replaces the earlier entry.
    pub fn ipv4_address(mut self, ip: Ipv4Address, prefix_length: Ipv4PrefixLength) -> Self {
        self.ipv4.push(Ipv4AddressEntry::new(ip, prefix_length));
        self
    }

    /// Adds an IPv6 address. A repeated address replaces the earlier entry.
    pub fn ipv6_address(mut self, ip: Ipv6Address, prefix_length: Ipv6PrefixLength) -> Self {
        self.ipv6.push(Ipv6AddressEntry::new(ip, prefix_length));
        self
    }

    pub fn build(self) -> Subinterface {
        debug!(
            index = self.index,
            vlan = ?self.vlan,
            ipv4 = self.ipv4.len(),
            ipv6 = self.ipv6.len(),
            "Building subinterface"
        );

        // Address blocks are only present when they hold an address
        let ipv4 = (!self.ipv4.is_empty()).then(|| self.ipv4.into_iter().collect());
        let ipv6 = (!self.ipv6.is_empty()).then(|| self.ipv6.into_iter().collect());

        Subinterface {
            index: self.index,
            config: SubinterfaceConfig {
                index: self.index,
                description: self.description,
                enabled: self.enabled,
            },
            vlan: self.vlan.map(Vlan::single_tagged),
            ipv4,
            ipv6,
        }
    }
}
