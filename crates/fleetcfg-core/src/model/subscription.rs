// ── Subscription domain types ──

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::duration;

/// How the target should stream updates for a path.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionMode {
    #[default]
    TargetDefined,
    Sample,
    OnChange,
}

/// Which part of an update a tag-subscription keys its tags on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TagMatch {
    Unconditional,
    #[default]
    Name,
    Value,
    Elements,
}

/// A single telemetry path subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub subscription_mode: SubscriptionMode,
    #[serde(
        default,
        with = "duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sample_interval: Option<Duration>,
    #[serde(default)]
    pub suppress_redundant: bool,
    #[serde(
        default,
        with = "duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub heartbeat_interval: Option<Duration>,
}

/// A subscription whose updates are turned into tags for other metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSubscription {
    #[serde(flatten)]
    pub subscription: Subscription,
    #[serde(default, rename = "match")]
    pub match_on: TagMatch,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<String>,
}

/// A subscription as stored in `shared_subscriptions.subscriptions`.
///
/// The `id` identifies the record inside its group; it is dropped when the
/// record is copied into a resolved config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSubscription {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub subscription: Subscription,
}

/// A tag-subscription as stored in `shared_subscriptions.tag_subscriptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedTagSubscription {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub tag_subscription: TagSubscription,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn shared_subscription_flattens_fields() {
        let raw = r#"{
            "id": "ifcounters",
            "name": "interfaces",
            "origin": "openconfig",
            "path": "/interfaces/interface/state/counters",
            "subscription_mode": "sample",
            "sample_interval": "10s"
        }"#;
        let shared: SharedSubscription = serde_json::from_str(raw).unwrap();
        assert_eq!(shared.id, "ifcounters");
        assert_eq!(shared.subscription.name, "interfaces");
        assert_eq!(shared.subscription.subscription_mode, SubscriptionMode::Sample);
        assert_eq!(
            shared.subscription.sample_interval,
            Some(Duration::from_secs(10))
        );
        assert!(!shared.subscription.suppress_redundant);
    }

    #[test]
    fn tag_subscription_reads_match_keyword() {
        let raw = r#"{
            "id": "descr",
            "name": "descr",
            "path": "/interfaces/interface/state/description",
            "match": "elements",
            "elements": ["interface"]
        }"#;
        let shared: SharedTagSubscription = serde_json::from_str(raw).unwrap();
        assert_eq!(shared.tag_subscription.match_on, TagMatch::Elements);
        assert_eq!(shared.tag_subscription.elements, vec!["interface"]);
        assert_eq!(
            shared.tag_subscription.subscription.subscription_mode,
            SubscriptionMode::TargetDefined
        );
    }

    #[test]
    fn modes_round_trip_through_strings() {
        assert_eq!(SubscriptionMode::OnChange.to_string(), "on_change");
        assert_eq!(
            SubscriptionMode::from_str("target_defined").unwrap(),
            SubscriptionMode::TargetDefined
        );
        assert_eq!(TagMatch::default(), TagMatch::Name);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = serde_json::from_str::<Subscription>(r#"{"subscription_mode":"poll"}"#);
        assert!(err.is_err());
    }
}
