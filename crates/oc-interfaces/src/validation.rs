//! Consistency checks for decoded trees.
//!
//! The builders keep list keys and `config` leaves in step, so a built tree
//! always passes. A decoded document may not: each list entry carries its
//! key twice, and nothing in the encoding stops two subinterfaces of one
//! port from matching the same VLAN.

use crate::error::{ModelError, ModelResult};
use crate::interface::{Interface, Interfaces};
use crate::subinterface::Subinterface;
use oc_types::{IpAddress, VlanId};
use std::collections::BTreeMap;
use tracing::warn;

impl Interfaces {
    /// Validates every interface in the tree.
    ///
    /// Stops at the first violation.
    pub fn validate(&self) -> ModelResult<()> {
        for (key, interface) in &self.interfaces {
            if *key != interface.name || interface.name != interface.config.name {
                return Err(ModelError::interface_key_mismatch(
                    key.as_str(),
                    interface.config.name.as_str(),
                ));
            }
            interface.validate()?;
        }
        Ok(())
    }
}

impl Interface {
    /// Validates this interface's subinterfaces.
    pub fn validate(&self) -> ModelResult<()> {
        let mut vlan_owners: BTreeMap<VlanId, u32> = BTreeMap::new();

        for (key, sub) in &self.subinterfaces.subinterfaces {
            if *key != sub.index || sub.index != sub.config.index {
                return Err(ModelError::SubinterfaceKeyMismatch {
                    interface: self.name.clone(),
                    key: *key,
                    index: sub.config.index,
                });
            }

            validate_addresses(&self.name, sub)?;

            if let Some(vlan) = sub.vlan_id() {
                // Iteration is in index order, so the owner is the lower index
                if let Some(first) = vlan_owners.insert(vlan, sub.index) {
                    warn!(
                        interface = %self.name,
                        %vlan,
                        first,
                        second = sub.index,
                        "VLAN matched by more than one subinterface"
                    );
                    return Err(ModelError::DuplicateVlanMatch {
                        interface: self.name.clone(),
                        vlan,
                        first,
                        second: sub.index,
                    });
                }
            }
        }
        Ok(())
    }
}

fn validate_addresses(interface: &str, sub: &Subinterface) -> ModelResult<()> {
    let v4 = sub
        .ipv4
        .iter()
        .flat_map(|ipv4| ipv4.addresses.address.iter())
        .map(|(key, entry)| (IpAddress::V4(*key), IpAddress::V4(entry.config.ip)));
    let v6 = sub
        .ipv6
        .iter()
        .flat_map(|ipv6| ipv6.addresses.address.iter())
        .map(|(key, entry)| (IpAddress::V6(*key), IpAddress::V6(entry.config.ip)));

    for (key, ip) in v4.chain(v6) {
        if key != ip {
            return Err(ModelError::AddressKeyMismatch {
                interface: interface.to_string(),
                index: sub.index,
                key,
                ip,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::InterfaceBuilder;
    use crate::network_instance::pe_interfaces;
    use crate::subinterface::SubinterfaceBuilder;
    use oc_types::InterfaceType;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Interfaces {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_built_tree_validates() {
        assert!(pe_interfaces().validate().is_ok());
        assert!(Interfaces::default().validate().is_ok());
    }

    #[test]
    fn test_interface_key_mismatch() {
        let interfaces = decode(json!({"interface": [
            {"name": "g0/0/0", "config": {"name": "g0/0/1", "type": "IF_ETHERNET"}}
        ]}));
        assert!(matches!(
            interfaces.validate(),
            Err(ModelError::InterfaceKeyMismatch { ref key, ref name })
                if key == "g0/0/0" && name == "g0/0/1"
        ));
    }

    #[test]
    fn test_subinterface_key_mismatch() {
        let interfaces = decode(json!({"interface": [{
            "name": "g0/0/0",
            "config": {"name": "g0/0/0", "type": "IF_ETHERNET"},
            "subinterfaces": {"subinterface": [{"index": 1042, "config": {"index": 1400}}]}
        }]}));
        assert!(matches!(
            interfaces.validate(),
            Err(ModelError::SubinterfaceKeyMismatch { key: 1042, index: 1400, .. })
        ));
    }

    #[test]
    fn test_address_key_mismatch() {
        let interfaces = decode(json!({"interface": [{
            "name": "g0/0/0",
            "config": {"name": "g0/0/0", "type": "IF_ETHERNET"},
            "subinterfaces": {"subinterface": [{
                "index": 1042,
                "config": {"index": 1042},
                "openconfig-if-ip:ipv6": {"addresses": {"address": [
                    {"ip": "2001:db8::1", "config": {"ip": "2001:db8::2", "prefix-length": 64}}
                ]}}
            }]}
        }]}));
        assert!(matches!(
            interfaces.validate(),
            Err(ModelError::AddressKeyMismatch { index: 1042, .. })
        ));
    }

    #[test]
    fn test_duplicate_vlan_match() {
        let vlan = VlanId::new(1042).unwrap();
        let iface = InterfaceBuilder::new("g0/0/0", InterfaceType::Ethernet)
            .subinterface(SubinterfaceBuilder::new(2042).vlan(vlan).build())
            .subinterface(SubinterfaceBuilder::new(1042).vlan(vlan).build())
            .build();

        match iface.validate() {
            Err(ModelError::DuplicateVlanMatch { first, second, .. }) => {
                assert_eq!((first, second), (1042, 2042));
            }
            other => panic!("Expected DuplicateVlanMatch, got {:?}", other),
        }
    }

    #[test]
    fn test_same_vlan_on_different_interfaces_is_allowed() {
        let vlan = VlanId::new(100).unwrap();
        let interfaces: Interfaces = ["g0/0/0", "g0/0/1"]
            .into_iter()
            .map(|name| {
                InterfaceBuilder::new(name, InterfaceType::Ethernet)
                    .subinterface(SubinterfaceBuilder::new(100).vlan(vlan).build())
                    .build()
            })
            .collect();
        assert!(interfaces.validate().is_ok());
    }
}
