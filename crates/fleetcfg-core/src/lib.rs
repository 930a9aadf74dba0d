//! Device inventory resolver for gNMI telemetry collectors.
//!
//! Takes a declarative inventory of devices plus shared subscription sets,
//! tag sets and common-config templates, and expands it into concrete
//! runtime configuration:
//!
//! - **[`Inventory`]**: Parsed input document (JSON, YAML or TOML via
//!   [`Inventory::parse`]). Read-only; every merge works on copies.
//!
//! - **[`resolve()`]** / **[`resolve_with()`]**: One-shot batch transform.
//!   Looks up each device's references, groups devices whose effective
//!   configuration is identical into one [`ConfigGroup`], and builds the
//!   per-address [`AddressTagIndex`]. Dangling references become
//!   [`ResolveWarning`]s reported to an injected [`WarningSink`]; they never
//!   abort the run.
//!
//! - **[`ConfigStore`]**: Accessor consumed by the collector through the
//!   [`ConfigProvider`] trait. Fails fast with
//!   [`CoreError::NotInitialized`] until a resolve has been published, then
//!   serves lock-free reads of an immutable snapshot.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod resolve;
pub mod store;
pub mod warning;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DuplicateAddressPolicy, ResolveOptions};
pub use error::CoreError;
pub use format::InventoryFormat;
pub use resolve::{
    AddressTagIndex, EffectiveConfig, GroupKey, Resolution, resolve, resolve_device, resolve_with,
};
pub use store::{ConfigProvider, ConfigStore};
pub use warning::{ResolveWarning, TracingSink, WarningSink};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    CommonConfig, ConfigGroup, ConnectionSettings, Device, Encoding, Inventory,
    SharedSubscription, SharedSubscriptions, SharedTagSubscription, Subscription,
    SubscriptionMode, TagMap, TagMatch, TagSubscription,
};
