// ── Inventory document formats ──
//
// The producer hands over text; this module turns it into an `Inventory`.
// Malformed documents are the one fatal failure of the whole pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::CoreError;
use crate::model::Inventory;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InventoryFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl InventoryFormat {
    /// Guess the format from a file extension. Unknown extensions are `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl Inventory {
    /// Decode an inventory document.
    pub fn parse(text: &str, format: InventoryFormat) -> Result<Self, CoreError> {
        match format {
            InventoryFormat::Json => {
                serde_json::from_str(text).map_err(|e| CoreError::parse(format, e))
            }
            InventoryFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| CoreError::parse(format, e))
            }
            InventoryFormat::Toml => toml::from_str(text).map_err(|e| CoreError::parse(format, e)),
        }
    }
}
