//! `openconfig-vlan` subinterface augmentation.
//!
//! Only the single-tagged match is modeled:
//!
//! ```text
//! vlan/match/single-tagged/config/vlan-id
//! ```

use oc_types::VlanId;
use serde::{Deserialize, Serialize};

/// VLAN container attached to a subinterface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vlan {
    #[serde(rename = "match", default)]
    pub(crate) vlan_match: VlanMatch,
}

impl Vlan {
    /// Creates a VLAN container matching frames with a single tag `vlan_id`.
    pub fn single_tagged(vlan_id: VlanId) -> Self {
        Self {
            vlan_match: VlanMatch {
                single_tagged: Some(SingleTagged {
                    config: SingleTaggedConfig { vlan_id },
                }),
            },
        }
    }

    /// Returns the match criteria.
    pub fn vlan_match(&self) -> &VlanMatch {
        &self.vlan_match
    }

    /// Returns the single-tagged VLAN id, if a single-tagged match is set.
    pub fn single_tagged_vlan_id(&self) -> Option<VlanId> {
        self.vlan_match
            .single_tagged
            .as_ref()
            .map(|tagged| tagged.config.vlan_id)
    }
}

/// VLAN match criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct VlanMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) single_tagged: Option<SingleTagged>,
}

impl VlanMatch {
    pub fn single_tagged(&self) -> Option<&SingleTagged> {
        self.single_tagged.as_ref()
    }
}

/// Single-tagged match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleTagged {
    pub(crate) config: SingleTaggedConfig,
}

impl SingleTagged {
    pub fn config(&self) -> &SingleTaggedConfig {
        &self.config
    }
}

/// Single-tagged match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct SingleTaggedConfig {
    pub(crate) vlan_id: VlanId,
}

impl SingleTaggedConfig {
    pub fn vlan_id(&self) -> VlanId {
        self.vlan_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_tagged() {
        let vlan = Vlan::single_tagged(VlanId::new(1400).unwrap());
        assert_eq!(vlan.single_tagged_vlan_id(), VlanId::new(1400).ok());
        assert_eq!(
            vlan.vlan_match()
                .single_tagged()
                .map(|tagged| tagged.config().vlan_id().as_u16()),
            Some(1400)
        );
    }

    #[test]
    fn test_encoding() {
        let vlan = Vlan::single_tagged(VlanId::new(1500).unwrap());
        assert_eq!(
            serde_json::to_value(&vlan).unwrap(),
            json!({"match": {"single-tagged": {"config": {"vlan-id": 1500}}}})
        );
    }

    #[test]
    fn test_decode_empty_match() {
        let vlan: Vlan = serde_json::from_value(json!({})).unwrap();
        assert_eq!(vlan.single_tagged_vlan_id(), None);
    }

    #[test]
    fn test_decode_rejects_reserved_vlan() {
        let result = serde_json::from_value::<Vlan>(
            json!({"match": {"single-tagged": {"config": {"vlan-id": 4095}}}}),
        );
        assert!(result.is_err());
    }
}
