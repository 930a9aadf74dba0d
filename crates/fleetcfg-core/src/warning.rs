// ── Resolution warnings ──
//
// Non-fatal findings about individual devices. The resolver reports each
// one to an injected `WarningSink` and also keeps them on the
// `Resolution`, so callers can assert on them without a logger.

use std::fmt;

use serde::Serialize;
use tracing::warn;

/// A dangling reference or malformed device record. Resolution continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ResolveWarning {
    MissingSubscriptionGroup {
        device: String,
        address: String,
        group: String,
    },
    MissingTagSubscriptionGroup {
        device: String,
        address: String,
        group: String,
    },
    /// The template falls back to empty; the ID still keys the group.
    MissingCommonConfig {
        device: String,
        address: String,
        common_config: String,
    },
    EmptyAddress { device: String },
    /// An earlier record was skipped because a later one reuses its address.
    DuplicateAddress { address: String, skipped: String },
}

impl ResolveWarning {
    /// Short machine-friendly name of the warning kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingSubscriptionGroup { .. } => "missing_subscription_group",
            Self::MissingTagSubscriptionGroup { .. } => "missing_tag_subscription_group",
            Self::MissingCommonConfig { .. } => "missing_common_config",
            Self::EmptyAddress { .. } => "empty_address",
            Self::DuplicateAddress { .. } => "duplicate_address",
        }
    }

    /// Address the warning is about, when there is one.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::MissingSubscriptionGroup { address, .. }
            | Self::MissingTagSubscriptionGroup { address, .. }
            | Self::MissingCommonConfig { address, .. }
            | Self::DuplicateAddress { address, .. } => Some(address),
            Self::EmptyAddress { .. } => None,
        }
    }
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSubscriptionGroup {
                device,
                address,
                group,
            } => write!(
                f,
                "subscription group '{group}' referenced by device {device} ({address}) not found in shared subscriptions"
            ),
            Self::MissingTagSubscriptionGroup {
                device,
                address,
                group,
            } => write!(
                f,
                "tag subscription group '{group}' referenced by device {device} ({address}) not found in shared tag subscriptions"
            ),
            Self::MissingCommonConfig {
                device,
                address,
                common_config,
            } => write!(
                f,
                "common config '{common_config}' referenced by device {device} ({address}) not found; using an empty template"
            ),
            Self::EmptyAddress { device } => {
                write!(f, "device {device} has no address and was skipped")
            }
            Self::DuplicateAddress { address, skipped } => write!(
                f,
                "address {address} appears more than once; earlier device {skipped} was skipped"
            ),
        }
    }
}

// ── Sinks ───────────────────────────────────────────────────────────

/// Where the resolver reports warnings.
pub trait WarningSink {
    fn report(&mut self, warning: &ResolveWarning);
}

/// Collects warnings.
impl WarningSink for Vec<ResolveWarning> {
    fn report(&mut self, warning: &ResolveWarning) {
        self.push(warning.clone());
    }
}

/// Discards warnings.
impl WarningSink for () {
    fn report(&mut self, _warning: &ResolveWarning) {}
}

/// Emits each warning as a `tracing` event at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn report(&mut self, warning: &ResolveWarning) {
        warn!(
            kind = warning.kind(),
            address = warning.address().unwrap_or("-"),
            "{warning}"
        );
    }
}
