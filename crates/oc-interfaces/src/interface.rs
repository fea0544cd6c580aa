//! Interfaces, the top-level interface list and the interface builder.

use crate::keyed::{collect_keyed, keyed_list, Keyed};
use crate::subinterface::Subinterface;
use oc_types::InterfaceType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Top-level `interfaces` container, keyed by interface name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interfaces {
    #[serde(rename = "interface", default, with = "keyed_list")]
    pub(crate) interfaces: BTreeMap<String, Interface>,
}

impl Interfaces {
    /// Returns the interface named `name`.
    pub fn get(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    /// Iterates interfaces in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.values()
    }

    /// Iterates interface names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl FromIterator<Interface> for Interfaces {
    fn from_iter<I: IntoIterator<Item = Interface>>(iter: I) -> Self {
        Self {
            interfaces: collect_keyed(iter),
        }
    }
}

/// A network interface, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interface {
    pub(crate) name: String,
    pub(crate) config: InterfaceConfig,
    #[serde(default, skip_serializing_if = "Subinterfaces::is_empty")]
    pub(crate) subinterfaces: Subinterfaces,
}

/// Interface configuration leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) if_type: InterfaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) mtu: Option<u16>,
}

/// Subinterfaces of an interface, keyed by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subinterfaces {
    #[serde(rename = "subinterface", default, with = "keyed_list")]
    pub(crate) subinterfaces: BTreeMap<u32, Subinterface>,
}

impl Subinterfaces {
    /// Returns the subinterface with `index`.
    pub fn get(&self, index: u32) -> Option<&Subinterface> {
        self.subinterfaces.get(&index)
    }

    /// Iterates subinterfaces in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Subinterface> {
        self.subinterfaces.values()
    }

    /// Iterates subinterface indices in order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.subinterfaces.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.subinterfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subinterfaces.is_empty()
    }
}

impl Interface {
    /// Returns the list key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &InterfaceConfig {
        &self.config
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn if_type(&self) -> InterfaceType {
        self.config.if_type
    }

    pub fn subinterfaces(&self) -> &Subinterfaces {
        &self.subinterfaces
    }

    /// Returns the subinterface with `index`.
    pub fn subinterface(&self, index: u32) -> Option<&Subinterface> {
        self.subinterfaces.get(index)
    }
}

impl InterfaceConfig {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_type(&self) -> InterfaceType {
        self.if_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn mtu(&self) -> Option<u16> {
        self.mtu
    }
}

impl Keyed for Interface {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}

/// Builder for an [`Interface`] and its subinterfaces.
///
/// ```
/// use oc_interfaces::{InterfaceBuilder, InterfaceType, SubinterfaceBuilder};
///
/// let iface = InterfaceBuilder::new("g0/0/1", InterfaceType::Ethernet)
///     .description("uplink")
///     .subinterface(SubinterfaceBuilder::new(10).build())
///     .build();
///
/// assert_eq!(iface.subinterfaces().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    name: String,
    if_type: InterfaceType,
    description: Option<String>,
    enabled: Option<bool>,
    mtu: Option<u16>,
    subinterfaces: Vec<Subinterface>,
}

impl InterfaceBuilder {
    pub fn new(name: impl Into<String>, if_type: InterfaceType) -> Self {
        Self {
            name: name.into(),
            if_type,
            description: None,
            enabled: None,
            mtu: None,
            subinterfaces: Vec::new(),
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

    pub fn mtu(mut self, mtu: u16) -> Self {
        self.mtu = Some(mtu);
        self
    }

    /// Adds a subinterface. A repeated index replaces the earlier entry.
    pub fn subinterface(mut self, subinterface: Subinterface) -> Self {
        self.subinterfaces.push(subinterface);
        self
    }

    pub fn build(self) -> Interface {
        debug!(
            name = %self.name,
            if_type = %self.if_type,
            subinterfaces = self.subinterfaces.len(),
            "Building interface"
        );

        Interface {
            config: InterfaceConfig {
                name: self.name.clone(),
                if_type: self.if_type,
                description: self.description,
                enabled: self.enabled,
                mtu: self.mtu,
            },
            name: self.name,
            subinterfaces: Subinterfaces {
                subinterfaces: collect_keyed(self.subinterfaces),
            },
        }
    }
}
