//! OpenConfig interfaces model.
//!
//! This crate models the subset of the OpenConfig interfaces tree used to
//! describe a provider-edge port:
//!
//! - [`Interfaces`] / [`Interface`]: `openconfig-interfaces` top-level list
//! - [`Subinterface`]: logical sub-interfaces keyed by index
//! - [`Vlan`]: `openconfig-vlan` single-tagged match on a subinterface
//! - [`Ipv4`] / [`Ipv6`]: `openconfig-if-ip` address blocks
//!
//! The VLAN and IP augmentations are closed optional fields on
//! [`Subinterface`] rather than a dynamic augmentation registry.
//!
//! Trees are assembled with [`InterfaceBuilder`] and [`SubinterfaceBuilder`]
//! and are immutable once built. [`render`] encodes them as RFC 7951 JSON or
//! YAML, and [`pe_interfaces`] returns the fixed PE port snapshot.
//!
//! # Example
//!
//! ```
//! use oc_interfaces::{pe_interfaces, render, OutputFormat};
//!
//! let interfaces = pe_interfaces();
//! let json = render::render(&interfaces, OutputFormat::Json, true).unwrap();
//! assert!(json.contains("openconfig-interfaces:interfaces"));
//! ```

pub mod error;
pub mod interface;
pub mod ip;
pub mod keyed;
pub mod network_instance;
pub mod render;
pub mod subinterface;
pub mod validation;
pub mod vlan;

// Re-export commonly used items at crate root
pub use error::{ModelError, ModelResult};
pub use interface::{Interface, InterfaceBuilder, InterfaceConfig, Interfaces, Subinterfaces};
pub use ip::{Ipv4, Ipv4AddressConfig, Ipv4AddressEntry, Ipv6, Ipv6AddressConfig, Ipv6AddressEntry};
pub use keyed::Keyed;
pub use network_instance::{pe_interfaces, PE_INTERFACE_NAME};
pub use render::OutputFormat;
pub use subinterface::{Subinterface, SubinterfaceBuilder, SubinterfaceConfig};
pub use vlan::{SingleTagged, SingleTaggedConfig, Vlan, VlanMatch};

// Re-export the primitive types for convenience
pub use oc_types::{
    InterfaceType, IpAddress, Ipv4Address, Ipv4PrefixLength, Ipv6Address, Ipv6PrefixLength,
    ParseError, VlanId,
};
