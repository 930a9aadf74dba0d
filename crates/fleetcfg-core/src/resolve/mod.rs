// ── Inventory resolution ──
//
// One-shot batch transform: inventory in, ordered config groups plus an
// address→tags index out. Single-threaded and synchronous; the output is
// immutable and safe to share once built.

mod grouping;
mod references;
mod tags;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::{DuplicateAddressPolicy, ResolveOptions};
use crate::error::CoreError;
use crate::model::{ConfigGroup, Inventory};
use crate::warning::{ResolveWarning, WarningSink};

pub use grouping::GroupKey;
pub use references::{EffectiveConfig, resolve_device};
pub use tags::AddressTagIndex;

use grouping::GroupBuilder;
use tags::DeviceTagBinding;

/// Everything a resolve run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub groups: Vec<ConfigGroup>,
    pub tags: AddressTagIndex,
    pub warnings: Vec<ResolveWarning>,
    /// Devices that made it into a group.
    pub device_count: usize,
}

impl Resolution {
    /// Groups that contain at least one of `addresses`, with members
    /// narrowed to those addresses. An empty filter returns every group.
    pub fn groups_for(&self, addresses: &[String]) -> Vec<ConfigGroup> {
        if addresses.is_empty() {
            return self.groups.clone();
        }
        self.groups
            .iter()
            .filter_map(|g| g.restricted_to(addresses))
            .collect()
    }

    /// The group `address` belongs to.
    pub fn group_of(&self, address: &str) -> Option<&ConfigGroup> {
        self.groups.iter().find(|g| g.contains(address))
    }
}

/// Resolve without an external warning sink. Warnings are still kept on
/// the returned `Resolution`.
pub fn resolve(inventory: &Inventory, options: &ResolveOptions) -> Result<Resolution, CoreError> {
    resolve_with(inventory, options, &mut ())
}

/// Resolve `inventory`, reporting every warning to `sink` as it is found.
///
/// Only a rejected duplicate address aborts; every per-device problem is a
/// warning and the rest of the inventory still resolves.
pub fn resolve_with(
    inventory: &Inventory,
    options: &ResolveOptions,
    sink: &mut dyn WarningSink,
) -> Result<Resolution, CoreError> {
    let last_index = last_index_by_address(inventory, options.duplicate_addresses)?;

    let mut warnings = Vec::new();
    let mut report = |warning: ResolveWarning| {
        sink.report(&warning);
        warnings.push(warning);
    };

    let mut groups = GroupBuilder::default();
    let mut tags = AddressTagIndex::default();
    let mut device_count = 0;

    for (index, device) in inventory.devices.iter().enumerate() {
        if device.address.is_empty() {
            report(ResolveWarning::EmptyAddress {
                device: device.device_id.clone(),
            });
            continue;
        }
        if last_index.get(device.address.as_str()) != Some(&index) {
            report(ResolveWarning::DuplicateAddress {
                address: device.address.clone(),
                skipped: device.label().to_owned(),
            });
            continue;
        }

        let (effective, device_warnings) = resolve_device(inventory, device);
        device_warnings.into_iter().for_each(&mut report);

        groups.add(&device.address, effective);
        tags.insert(
            &device.address,
            DeviceTagBinding::from(device).resolve(&inventory.shared_tags),
        );
        device_count += 1;
    }

    debug!(
        devices = device_count,
        groups = groups.len(),
        warnings = warnings.len(),
        "inventory resolved"
    );

    Ok(Resolution {
        groups: groups.finish(),
        tags,
        warnings,
        device_count,
    })
}

/// Index of the last device carrying each non-empty address. Under
/// `Reject`, a repeated address fails the whole resolve instead.
fn last_index_by_address(
    inventory: &Inventory,
    policy: DuplicateAddressPolicy,
) -> Result<HashMap<&str, usize>, CoreError> {
    let mut last = HashMap::with_capacity(inventory.devices.len());
    for (index, device) in inventory.devices.iter().enumerate() {
        if device.address.is_empty() {
            continue;
        }
        let previous = last.insert(device.address.as_str(), index);
        if previous.is_some() && policy == DuplicateAddressPolicy::Reject {
            return Err(CoreError::DuplicateAddress {
                address: device.address.clone(),
            });
        }
    }
    Ok(last)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
