// ── Resolver output types ──

use serde::{Deserialize, Serialize};

use super::common::CommonConfig;

/// A fully merged unit of runtime configuration shared by one or more
/// devices. Immutable once the resolver publishes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigGroup {
    /// ID of the common-config template the group was built on, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_config: Option<String>,
    #[serde(flatten)]
    pub config: CommonConfig,
    /// Member addresses in inventory order.
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl ConfigGroup {
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.iter().any(|a| a == address)
    }

    /// Copy of this group with its members narrowed to `wanted`, or `None`
    /// if no member is wanted.
    pub(crate) fn restricted_to(&self, wanted: &[String]) -> Option<Self> {
        let addresses: Vec<String> = self
            .addresses
            .iter()
            .filter(|a| wanted.contains(a))
            .cloned()
            .collect();
        if addresses.is_empty() {
            return None;
        }
        Some(Self {
            common_config: self.common_config.clone(),
            config: self.config.clone(),
            addresses,
        })
    }
}
