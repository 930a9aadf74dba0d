// ── Common-config templates ──
//
// A template carries connection settings shared by many devices plus the
// subscriptions every device using it gets. Resolution always works on a
// clone; the inventory's copy is never extended in place.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::duration;
use super::subscription::{Subscription, TagSubscription};

/// Payload encoding requested from the target.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Encoding {
    #[default]
    Proto,
    Json,
    JsonIetf,
    Bytes,
    Ascii,
}

/// Connection-level settings of a common config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default)]
    pub encoding: Encoding,
    /// Delay before reconnecting after the stream drops.
    #[serde(
        default,
        with = "duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub redial: Option<Duration>,
    /// Max gRPC message size in bytes; `None` keeps the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_msg_size: Option<u64>,
    #[serde(default)]
    pub enable_tls: bool,
    #[serde(default)]
    pub insecure_skip_verify: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendor_specific: Vec<String>,
}

/// A common-config template, and also the merged config of a resolved group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    #[serde(flatten)]
    pub settings: ConnectionSettings,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub tag_subscriptions: Vec<TagSubscription>,
}

impl CommonConfig {
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty() && self.tag_subscriptions.is_empty()
    }
}
