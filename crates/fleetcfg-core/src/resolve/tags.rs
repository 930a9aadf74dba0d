// ── Tag resolution ──
//
// Per-address tag maps: device-local tags first, then each referenced
// shared tag group in declaration order. Later layers overwrite earlier
// ones, so shared tags always beat local tags of the same key.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::model::{Device, TagMap};

/// What a device contributes to tag resolution. Discarded afterwards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeviceTagBinding<'a> {
    pub(crate) address: &'a str,
    pub(crate) tag_groups: &'a [String],
    pub(crate) tags: &'a TagMap,
}

impl<'a> From<&'a Device> for DeviceTagBinding<'a> {
    fn from(device: &'a Device) -> Self {
        Self {
            address: &device.address,
            tag_groups: &device.tag_groups,
            tags: &device.tags,
        }
    }
}

impl DeviceTagBinding<'_> {
    /// Merge local tags with the referenced shared groups.
    pub(crate) fn resolve(&self, shared: &IndexMap<String, TagMap>) -> TagMap {
        let mut merged = self.tags.clone();
        for id in self.tag_groups {
            match shared.get(id) {
                Some(group) => {
                    merged.extend(group.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                None => debug!(address = self.address, group = %id, "shared tag group not found"),
            }
        }
        merged
    }
}

/// Resolved tags keyed by device address, in inventory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressTagIndex {
    by_address: IndexMap<String, TagMap>,
}

impl AddressTagIndex {
    pub(crate) fn insert(&mut self, address: &str, tags: TagMap) {
        self.by_address.insert(address.to_owned(), tags);
    }

    /// Tags for `address`; unknown addresses get an empty map.
    pub fn tags(&self, address: &str) -> TagMap {
        self.by_address.get(address).cloned().unwrap_or_default()
    }

    pub fn get(&self, address: &str) -> Option<&TagMap> {
        self.by_address.get(address)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.by_address.contains_key(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagMap)> {
        self.by_address.iter().map(|(a, t)| (a.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> TagMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn shared() -> IndexMap<String, TagMap> {
        let mut shared = IndexMap::new();
        shared.insert("prod".to_owned(), tags(&[("env", "prod"), ("region", "us")]));
        shared.insert("eu".to_owned(), tags(&[("region", "eu")]));
        shared
    }

    #[test]
    fn shared_tags_override_local_tags() {
        let local = tags(&[("env", "dev")]);
        let groups = vec!["prod".to_owned()];
        let binding = DeviceTagBinding {
            address: "a",
            tag_groups: &groups,
            tags: &local,
        };
        assert_eq!(
            binding.resolve(&shared()),
            tags(&[("env", "prod"), ("region", "us")])
        );
    }

    #[test]
    fn later_groups_override_earlier_groups() {
        let local = TagMap::new();
        let groups = vec!["prod".to_owned(), "eu".to_owned()];
        let binding = DeviceTagBinding {
            address: "a",
            tag_groups: &groups,
            tags: &local,
        };
        assert_eq!(
            binding.resolve(&shared()),
            tags(&[("env", "prod"), ("region", "eu")])
        );
    }

    #[test]
    fn missing_groups_contribute_nothing() {
        let local = tags(&[("rack", "r12")]);
        let groups = vec!["nowhere".to_owned()];
        let binding = DeviceTagBinding {
            address: "a",
            tag_groups: &groups,
            tags: &local,
        };
        assert_eq!(binding.resolve(&shared()), local);
    }

    #[test]
    fn unknown_address_is_empty() {
        let mut index = AddressTagIndex::default();
        index.insert("10.0.0.1", tags(&[("k", "v")]));
        assert!(index.tags("10.0.0.99").is_empty());
        assert_eq!(index.tags("10.0.0.1"), tags(&[("k", "v")]));
        assert!(index.contains("10.0.0.1"));
        assert_eq!(index.len(), 1);
    }
}
