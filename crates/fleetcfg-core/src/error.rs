// ── Core error types ──
//
// Only structural problems are errors. Per-device reference problems are
// `ResolveWarning`s and never abort a resolve.

use thiserror::Error;

use crate::format::InventoryFormat;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("could not decode {format} inventory: {message}")]
    Parse {
        format: InventoryFormat,
        message: String,
    },

    #[error("address {address} is used by more than one device")]
    DuplicateAddress { address: String },

    #[error("device configuration has not been resolved yet")]
    NotInitialized,
}

impl CoreError {
    pub(crate) fn parse(format: InventoryFormat, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }
}
