// ── Inventory document ──
//
// The raw declarative input: shared dictionaries plus the ordered device
// list. Read-only for the resolver; every merge happens on copies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::TagMap;
use super::common::CommonConfig;
use super::subscription::{SharedSubscription, SharedTagSubscription};

/// Reusable subscription sets, keyed by group ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSubscriptions {
    #[serde(default)]
    pub subscriptions: IndexMap<String, Vec<SharedSubscription>>,
    #[serde(default)]
    pub tag_subscriptions: IndexMap<String, Vec<SharedTagSubscription>>,
}

/// One monitored endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Informational only; never used as a key.
    #[serde(default)]
    pub device_id: String,
    /// Join key for tags and group membership.
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "subscriptions")]
    pub subscription_groups: Vec<String>,
    #[serde(default, rename = "tag_subscriptions")]
    pub tag_subscription_groups: Vec<String>,
    #[serde(default, rename = "common_config", skip_serializing_if = "Option::is_none")]
    pub common_config: Option<String>,
    #[serde(default, rename = "shared_tag_group", alias = "shared_tag_groups")]
    pub tag_groups: Vec<String>,
    #[serde(default)]
    pub tags: TagMap,
}

impl Device {
    /// The referenced common-config ID, with `""` treated as absent.
    pub fn common_config_id(&self) -> Option<&str> {
        self.common_config.as_deref().filter(|id| !id.is_empty())
    }

    /// Label used in log lines and warnings: the device ID when present,
    /// otherwise the address.
    pub fn label(&self) -> &str {
        if self.device_id.is_empty() {
            &self.address
        } else {
            &self.device_id
        }
    }
}

/// The whole parsed inventory document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub shared_subscriptions: SharedSubscriptions,
    #[serde(default)]
    pub shared_common_configs: IndexMap<String, CommonConfig>,
    #[serde(default)]
    pub shared_tags: IndexMap<String, TagMap>,
    #[serde(default)]
    pub devices: Vec<Device>,
}
