use pretty_assertions::assert_eq;

use super::*;
use crate::format::InventoryFormat;
use crate::model::TagMap;

const INVENTORY: &str = r#"{
    "shared_subscriptions": {
        "subscriptions": {
            "g1": [
                {"id": "sub1", "name": "sub1", "path": "/interfaces", "subscription_mode": "sample", "sample_interval": "10s"}
            ],
            "g2": [
                {"id": "sub2", "name": "sub2", "path": "/system/cpu"},
                {"id": "sub3", "name": "sub3", "path": "/system/memory"}
            ]
        },
        "tag_subscriptions": {
            "descr": [
                {"id": "descr", "name": "descr", "path": "/interfaces/interface/state/description", "match": "name"}
            ]
        }
    },
    "shared_common_configs": {
        "arista": {
            "encoding": "json_ietf",
            "redial": "10s",
            "subscriptions": [{"name": "hostname", "path": "/system/state/hostname"}]
        }
    },
    "shared_tags": {
        "prod": {"env": "prod", "region": "us"},
        "eu": {"region": "eu"}
    },
    "devices": [
        {"device_id": "d1", "address": "10.0.0.1", "subscriptions": ["g1"], "shared_tag_group": ["prod"], "tags": {"env": "dev", "rack": "r1"}},
        {"device_id": "d2", "address": "10.0.0.2", "subscriptions": ["g1", "g2"], "common_config": "arista"},
        {"device_id": "d3", "address": "10.0.0.3", "subscriptions": ["g1"], "tags": {"rack": "r3"}},
        {"device_id": "d4", "address": "10.0.0.4", "subscriptions": ["g1", "g2"], "common_config": "arista", "tag_subscriptions": ["descr"]},
        {"device_id": "d5", "address": "10.0.0.5", "subscriptions": ["g1", "g2"], "common_config": "arista", "shared_tag_group": ["prod", "eu"]}
    ]
}"#;

fn inventory() -> Inventory {
    Inventory::parse(INVENTORY, InventoryFormat::Json).unwrap()
}

fn tags(pairs: &[(&str, &str)]) -> TagMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn addresses(group: &ConfigGroup) -> Vec<&str> {
    group.addresses.iter().map(String::as_str).collect()
}

fn sub_names(group: &ConfigGroup) -> Vec<&str> {
    group
        .config
        .subscriptions
        .iter()
        .map(|s| s.name.as_str())
        .collect()
}

fn device(address: &str, subs: &[&str]) -> crate::model::Device {
    crate::model::Device {
        device_id: format!("dev-{address}"),
        address: address.to_owned(),
        subscription_groups: subs.iter().map(|s| (*s).to_owned()).collect(),
        ..crate::model::Device::default()
    }
}

// ── Grouping ────────────────────────────────────────────────────────

#[test]
fn groups_follow_first_occurrence_order() {
    let res = resolve(&inventory(), &ResolveOptions::default()).unwrap();

    assert_eq!(res.groups.len(), 3);
    assert_eq!(addresses(&res.groups[0]), ["10.0.0.1", "10.0.0.3"]);
    assert_eq!(addresses(&res.groups[1]), ["10.0.0.2", "10.0.0.5"]);
    assert_eq!(addresses(&res.groups[2]), ["10.0.0.4"]);
    assert_eq!(res.device_count, 5);
    assert!(res.warnings.is_empty());
}

#[test]
fn merged_group_config_extends_the_template() {
    let res = resolve(&inventory(), &ResolveOptions::default()).unwrap();
    let arista = &res.groups[1];

    assert_eq!(arista.common_config.as_deref(), Some("arista"));
    assert_eq!(sub_names(arista), ["hostname", "sub1", "sub2", "sub3"]);
    assert_eq!(
        arista.config.settings.encoding,
        crate::model::Encoding::JsonIetf
    );
    assert!(arista.config.tag_subscriptions.is_empty());

    let tagged = &res.groups[2];
    assert_eq!(tagged.config.tag_subscriptions.len(), 1);
    assert_eq!(tagged.config.tag_subscriptions[0].subscription.name, "descr");
}

#[test]
fn shared_template_is_never_mutated() {
    let inv = inventory();
    let before = inv.shared_common_configs["arista"].clone();
    resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(inv.shared_common_configs["arista"], before);
    assert_eq!(before.subscriptions.len(), 1);
}

#[test]
fn differing_common_config_splits_groups() {
    let mut inv = inventory();
    inv.devices = vec![device("a", &["g1"]), device("b", &["g1"])];
    inv.devices[1].common_config = Some("arista".into());

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.groups.len(), 2);
}

#[test]
fn devices_without_references_form_an_empty_group() {
    let mut inv = inventory();
    inv.devices = vec![device("a", &[]), device("b", &["g1"]), device("c", &[])];

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.groups.len(), 2);
    assert!(res.groups[0].config.is_empty());
    assert_eq!(addresses(&res.groups[0]), ["a", "c"]);
    assert_eq!(res.device_count, 3);
}

#[test]
fn end_to_end_two_devices_one_group() {
    let mut inv = inventory();
    inv.devices = vec![device("A", &["g1"]), device("B", &["g1"])];

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.groups.len(), 1);
    assert_eq!(sub_names(&res.groups[0]), ["sub1"]);
    assert_eq!(addresses(&res.groups[0]), ["A", "B"]);
    assert_eq!(res.tags.tags("A"), TagMap::new());
    assert_eq!(res.tags.tags("B"), TagMap::new());
}

#[test]
fn different_references_to_the_same_records_share_a_group() {
    let mut inv = inventory();
    let g2 = inv.shared_subscriptions.subscriptions["g2"].clone();
    inv.shared_subscriptions
        .subscriptions
        .insert("cpu".into(), vec![g2[0].clone()]);
    inv.shared_subscriptions
        .subscriptions
        .insert("memory".into(), vec![g2[1].clone()]);
    inv.devices = vec![device("A", &["g2"]), device("B", &["cpu", "memory"])];

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.groups.len(), 1);
    assert_eq!(sub_names(&res.groups[0]), ["sub2", "sub3"]);
    assert_eq!(addresses(&res.groups[0]), ["A", "B"]);
}

#[test]
fn same_record_id_with_different_contents_splits_groups() {
    let mut inv = inventory();
    let mut moved = inv.shared_subscriptions.subscriptions["g1"].clone();
    moved[0].subscription.path = "/interfaces/interface/state/counters".into();
    inv.shared_subscriptions
        .subscriptions
        .insert("g1-counters".into(), moved);
    inv.devices = vec![device("A", &["g1"]), device("B", &["g1-counters"])];

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.groups.len(), 2);
    assert_eq!(sub_names(&res.groups[0]), sub_names(&res.groups[1]));
}

// ── Dangling references ─────────────────────────────────────────────

#[test]
fn dangling_reference_still_produces_a_group() {
    let mut inv = inventory();
    inv.devices = vec![device("a", &["g1", "nope"]), device("b", &["g1"])];

    let mut sink: Vec<ResolveWarning> = Vec::new();
    let res = resolve_with(&inv, &ResolveOptions::default(), &mut sink).unwrap();

    assert_eq!(res.groups.len(), 1);
    assert_eq!(addresses(&res.groups[0]), ["a", "b"]);
    assert_eq!(
        res.warnings,
        vec![ResolveWarning::MissingSubscriptionGroup {
            device: "dev-a".into(),
            address: "a".into(),
            group: "nope".into(),
        }]
    );
    assert_eq!(sink, res.warnings);
}

// ── Tags ────────────────────────────────────────────────────────────

#[test]
fn tag_index_applies_precedence() {
    let res = resolve(&inventory(), &ResolveOptions::default()).unwrap();

    assert_eq!(
        res.tags.tags("10.0.0.1"),
        tags(&[("env", "prod"), ("rack", "r1"), ("region", "us")])
    );
    assert_eq!(res.tags.tags("10.0.0.3"), tags(&[("rack", "r3")]));
    assert_eq!(
        res.tags.tags("10.0.0.5"),
        tags(&[("env", "prod"), ("region", "eu")])
    );
    assert!(res.tags.tags("10.0.0.99").is_empty());
    assert_eq!(res.tags.len(), 5);
}

#[test]
fn shared_group_overrides_local_env_tag() {
    let mut inv = Inventory::default();
    inv.shared_tags
        .insert("shared".into(), tags(&[("env", "prod"), ("region", "us")]));
    let mut dev = device("10.1.1.1", &[]);
    dev.tags = tags(&[("env", "dev")]);
    dev.tag_groups = vec!["shared".into()];
    inv.devices.push(dev);

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(
        res.tags.tags("10.1.1.1"),
        tags(&[("env", "prod"), ("region", "us")])
    );
}

// ── Address validation ──────────────────────────────────────────────

#[test]
fn empty_address_is_skipped_with_warning() {
    let mut inv = inventory();
    inv.devices = vec![device("", &["g1"]), device("b", &["g1"])];
    inv.devices[0].device_id = "ghost".into();

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.device_count, 1);
    assert_eq!(addresses(&res.groups[0]), ["b"]);
    assert_eq!(
        res.warnings,
        vec![ResolveWarning::EmptyAddress {
            device: "ghost".into()
        }]
    );
}

#[test]
fn duplicate_address_last_record_wins() {
    let mut inv = inventory();
    inv.devices = vec![
        device("a", &["g1"]),
        device("b", &["g1"]),
        device("a", &["g2"]),
    ];
    inv.devices[0].device_id = "old".into();
    inv.devices[0].tags = tags(&[("gen", "1")]);
    inv.devices[2].tags = tags(&[("gen", "2")]);

    let res = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(res.groups.len(), 2);
    assert_eq!(addresses(&res.groups[0]), ["b"]);
    assert_eq!(addresses(&res.groups[1]), ["a"]);
    assert_eq!(sub_names(&res.groups[1]), ["sub2", "sub3"]);
    assert_eq!(res.tags.tags("a"), tags(&[("gen", "2")]));
    assert_eq!(
        res.warnings,
        vec![ResolveWarning::DuplicateAddress {
            address: "a".into(),
            skipped: "old".into(),
        }]
    );
}

#[test]
fn duplicate_address_can_be_rejected() {
    let mut inv = inventory();
    inv.devices = vec![device("a", &["g1"]), device("a", &["g2"])];
    let options = ResolveOptions {
        duplicate_addresses: DuplicateAddressPolicy::Reject,
    };

    let err = resolve(&inv, &options).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateAddress { ref address } if address == "a"));
}

// ── Lookups and determinism ─────────────────────────────────────────

#[test]
fn groups_for_filters_and_narrows() {
    let res = resolve(&inventory(), &ResolveOptions::default()).unwrap();

    assert_eq!(res.groups_for(&[]).len(), 3);

    let picked = res.groups_for(&["10.0.0.5".to_owned(), "10.0.0.3".to_owned()]);
    assert_eq!(picked.len(), 2);
    assert_eq!(addresses(&picked[0]), ["10.0.0.3"]);
    assert_eq!(addresses(&picked[1]), ["10.0.0.5"]);

    assert!(res.groups_for(&["10.9.9.9".to_owned()]).is_empty());
    assert_eq!(
        res.group_of("10.0.0.4").map(|g| g.config.tag_subscriptions.len()),
        Some(1)
    );
}

#[test]
fn resolving_twice_is_idempotent() {
    let inv = inventory();
    let first = resolve(&inv, &ResolveOptions::default()).unwrap();
    let second = resolve(&inv, &ResolveOptions::default()).unwrap();
    assert_eq!(first, second);
}
