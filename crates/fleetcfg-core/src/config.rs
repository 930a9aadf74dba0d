// ── Resolver options ──
//
// Tuning for a resolve run. Built by the caller; core never reads
// settings files.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What to do when two device records share an address.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DuplicateAddressPolicy {
    /// Keep the last record for the address; earlier ones are skipped
    /// with a warning.
    #[default]
    LastWins,
    /// Abort the resolve with `CoreError::DuplicateAddress`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    #[serde(default)]
    pub duplicate_addresses: DuplicateAddressPolicy,
}
