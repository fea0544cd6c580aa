//! The provider-edge port snapshot.
//!
//! One Ethernet port, `g0/0/0`, carrying three single-tagged VLAN
//! subinterfaces. Only the pink VLAN (1042) is routed in the global
//! instance and has addresses; blue (1400) and cyan (1500) are attached to
//! L2 services and carry no IP configuration.

use crate::interface::{InterfaceBuilder, Interfaces};
use crate::subinterface::{Subinterface, SubinterfaceBuilder};
use oc_types::{
    InterfaceType, Ipv4Address, Ipv4PrefixLength, Ipv6Address, Ipv6PrefixLength, VlanId,
};
use tracing::debug;

/// Name of the PE port.
pub const PE_INTERFACE_NAME: &str = "g0/0/0";

const PE_INTERFACE_DESCRIPTION: &str = "PE Interface 1";

/// A VLAN subinterface of the PE port; the subinterface index equals the VLAN id.
struct VlanInstance {
    vlan: VlanId,
    description: &'static str,
}

impl VlanInstance {
    const fn new(id: u16, description: &'static str) -> Self {
        match VlanId::checked(id) {
            Some(vlan) => Self { vlan, description },
            None => panic!("VLAN id out of range"),
        }
    }

    fn builder(&self) -> SubinterfaceBuilder {
        SubinterfaceBuilder::new(u32::from(self.vlan))
            .description(self.description)
            .vlan(self.vlan)
    }
}

const PINK: VlanInstance = VlanInstance::new(1042, "pink VLAN instance in GLOBAL");
const BLUE: VlanInstance = VlanInstance::new(1400, "blue VLAN instance in L2VSI");
const CYAN: VlanInstance = VlanInstance::new(1500, "cyan VLAN instance in L2P2P");

const PINK_IPV4: Ipv4Address = Ipv4Address::new(192, 168, 1, 2);
const PINK_IPV4_PREFIX: Ipv4PrefixLength = match Ipv4PrefixLength::checked(24) {
    Some(len) => len,
    None => panic!("IPv4 prefix length out of range"),
};

const PINK_IPV6: Ipv6Address = Ipv6Address::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1);
const PINK_IPV6_PREFIX: Ipv6PrefixLength = match Ipv6PrefixLength::checked(64) {
    Some(len) => len,
    None => panic!("IPv6 prefix length out of range"),
};

fn pink_subinterface() -> Subinterface {
    PINK.builder()
        .ipv4_address(PINK_IPV4, PINK_IPV4_PREFIX)
        .ipv6_address(PINK_IPV6, PINK_IPV6_PREFIX)
        .build()
}

/// Builds the PE interface set.
///
/// Every value is a compile-time constant, so this cannot fail, and each
/// call returns a fresh, structurally identical tree.
pub fn pe_interfaces() -> Interfaces {
    let pe = InterfaceBuilder::new(PE_INTERFACE_NAME, InterfaceType::Ethernet)
        .description(PE_INTERFACE_DESCRIPTION)
        .subinterface(pink_subinterface())
        .subinterface(BLUE.builder().build())
        .subinterface(CYAN.builder().build())
        .build();

    debug!(
        interface = PE_INTERFACE_NAME,
        subinterfaces = pe.subinterfaces().len(),
        "Built PE interface set"
    );

    std::iter::once(pe).collect()
}
