// ── Reference resolution ──
//
// Turns one device's group references into concrete subscription lists
// on top of a cloned common-config template. Stateless: a pure function of
// (inventory, device) plus the warnings it produced.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{CommonConfig, Device, Inventory};
use crate::warning::ResolveWarning;

use super::grouping::GroupKey;

/// A device's configuration after its references were looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Common-config ID the device names, even when the template is missing.
    pub common_config: Option<String>,
    /// Template clone with every resolved subscription appended.
    pub config: CommonConfig,
}

impl EffectiveConfig {
    /// Grouping identity: the common-config ID plus the effective
    /// subscription and tag-subscription sequences.
    pub fn key(&self) -> GroupKey {
        GroupKey {
            common_config: self.common_config.clone(),
            subscriptions: self.config.subscriptions.clone(),
            tag_subscriptions: self.config.tag_subscriptions.clone(),
        }
    }
}

/// Resolve `device`'s subscription-group, tag-subscription-group and
/// common-config references against the shared dictionaries.
///
/// Missing groups and templates are reported as warnings and contribute
/// nothing. A group ID listed twice on the same device is applied once.
pub fn resolve_device(
    inventory: &Inventory,
    device: &Device,
) -> (EffectiveConfig, Vec<ResolveWarning>) {
    let mut warnings = Vec::new();
    let common_config = device.common_config_id().map(str::to_owned);

    let mut config = match common_config.as_deref() {
        Some(id) => match inventory.shared_common_configs.get(id) {
            Some(template) => template.clone(),
            None => {
                warnings.push(ResolveWarning::MissingCommonConfig {
                    device: device.label().to_owned(),
                    address: device.address.clone(),
                    common_config: id.to_owned(),
                });
                CommonConfig::default()
            }
        },
        None => CommonConfig::default(),
    };

    for group in unique(&device.subscription_groups, device) {
        let Some(records) = inventory.shared_subscriptions.subscriptions.get(group) else {
            warnings.push(ResolveWarning::MissingSubscriptionGroup {
                device: device.label().to_owned(),
                address: device.address.clone(),
                group: group.to_owned(),
            });
            continue;
        };
        config
            .subscriptions
            .extend(records.iter().map(|r| r.subscription.clone()));
    }

    for group in unique(&device.tag_subscription_groups, device) {
        let Some(records) = inventory.shared_subscriptions.tag_subscriptions.get(group) else {
            warnings.push(ResolveWarning::MissingTagSubscriptionGroup {
                device: device.label().to_owned(),
                address: device.address.clone(),
                group: group.to_owned(),
            });
            continue;
        };
        config
            .tag_subscriptions
            .extend(records.iter().map(|r| r.tag_subscription.clone()));
    }

    (
        EffectiveConfig {
            common_config,
            config,
        },
        warnings,
    )
}

/// Reference IDs in declaration order with repeats dropped.
fn unique<'a>(ids: &'a [String], device: &'a Device) -> impl Iterator<Item = &'a str> {
    let mut seen = HashSet::new();
    ids.iter().map(String::as_str).filter(move |id| {
        let first = seen.insert(*id);
        if !first {
            debug!(device = device.label(), group = id, "ignoring repeated group reference");
        }
        first
    })
}
