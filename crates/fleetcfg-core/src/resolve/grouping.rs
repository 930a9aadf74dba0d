// ── Grouping engine ──
//
// Devices with identical effective configuration share one `ConfigGroup`.
// The key holds the resolved records themselves, so two devices that
// reach the same sequences through different group references still
// merge, and records that merely share an ID do not.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::model::{ConfigGroup, Subscription, TagSubscription};

use super::references::EffectiveConfig;

/// Canonical identity of a device's effective configuration.
///
/// The common-config ID is compared by name; its expanded contents already
/// show up in the effective sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub common_config: Option<String>,
    pub subscriptions: Vec<Subscription>,
    pub tag_subscriptions: Vec<TagSubscription>,
}

/// Accumulates groups in first-seen key order.
#[derive(Debug, Default)]
pub(crate) struct GroupBuilder {
    groups: IndexMap<GroupKey, ConfigGroup>,
}

impl GroupBuilder {
    /// Add a device. The first device with a given key creates the group
    /// from its merged config; later ones only join the member list.
    pub(crate) fn add(&mut self, address: &str, effective: EffectiveConfig) {
        match self.groups.entry(effective.key()) {
            Entry::Occupied(mut entry) => entry.get_mut().addresses.push(address.to_owned()),
            Entry::Vacant(entry) => {
                entry.insert(ConfigGroup {
                    common_config: effective.common_config,
                    config: effective.config,
                    addresses: vec![address.to_owned()],
                });
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn finish(self) -> Vec<ConfigGroup> {
        self.groups.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::CommonConfig;

    fn sub(name: &str, path: &str) -> Subscription {
        Subscription {
            name: name.into(),
            path: path.into(),
            ..Subscription::default()
        }
    }

    fn effective(common: Option<&str>, subs: &[Subscription]) -> EffectiveConfig {
        EffectiveConfig {
            common_config: common.map(str::to_owned),
            config: CommonConfig {
                subscriptions: subs.to_vec(),
                ..CommonConfig::default()
            },
        }
    }

    #[test]
    fn same_key_shares_a_group_in_order() {
        let s1 = sub("s1", "/a");
        let mut b = GroupBuilder::default();
        b.add("a", effective(None, &[s1.clone()]));
        b.add("b", effective(Some("c"), &[s1.clone()]));
        b.add("c", effective(None, &[s1]));
        assert_eq!(b.len(), 2);

        let groups = b.finish();
        assert_eq!(groups[0].addresses, ["a", "c"]);
        assert_eq!(groups[0].common_config, None);
        assert_eq!(groups[1].addresses, ["b"]);
        assert_eq!(groups[1].common_config.as_deref(), Some("c"));
    }

    #[test]
    fn same_name_with_different_contents_splits() {
        let mut b = GroupBuilder::default();
        b.add("x", effective(None, &[sub("cpu", "/system/cpu")]));
        b.add("y", effective(None, &[sub("cpu", "/components/cpu")]));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn record_order_is_part_of_the_key() {
        let (one, two) = (sub("one", "/1"), sub("two", "/2"));
        let mut b = GroupBuilder::default();
        b.add("x", effective(None, &[one.clone(), two.clone()]));
        b.add("y", effective(None, &[two, one]));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn empty_configs_still_form_a_group() {
        let mut b = GroupBuilder::default();
        b.add("lonely", effective(None, &[]));
        let groups = b.finish();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].config.is_empty());
        assert_eq!(groups[0].addresses, ["lonely"]);
    }
}
