// ── Domain model ──
//
// Passive data types for the inventory document and the resolver output.

pub mod common;
pub mod duration;
pub mod group;
pub mod inventory;
pub mod subscription;

use std::collections::BTreeMap;

/// Flat tag map. Ordered so rendered output is stable.
pub type TagMap = BTreeMap<String, String>;

pub use common::{CommonConfig, ConnectionSettings, Encoding};
pub use group::ConfigGroup;
pub use inventory::{Device, Inventory, SharedSubscriptions};
pub use subscription::{
    SharedSubscription, SharedTagSubscription, Subscription, SubscriptionMode, TagMatch,
    TagSubscription,
};
