//! CLI configuration: a thin wrapper around `fleetcfg_config`.
//!
//! Adds `GlobalOpts`-aware resolution on top of the shared settings:
//! flags win over the settings file, which wins over built-in defaults.

use std::path::PathBuf;

use clap::ValueEnum;

use fleetcfg_core::{DuplicateAddressPolicy, InventoryFormat, ResolveOptions};

use crate::cli::{ColorMode, DocumentFormat, DuplicatePolicy, GlobalOpts, OutputFormat};
use crate::error::CliError;

use fleetcfg_config::{config_path, load_config_from, load_config_or_default};

pub use fleetcfg_config::{Config, load_configured_inventory, save_config_to};

/// Settings file in effect: `--config` if given, else the platform path.
pub fn settings_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load settings. An explicit `--config` file must load cleanly; the
/// platform default silently falls back to defaults.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    match global.config {
        Some(ref path) => Ok(load_config_from(path)?),
        None => Ok(load_config_or_default()),
    }
}

/// Output format: flag > settings > table.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> Result<OutputFormat, CliError> {
    match global.output {
        Some(format) => Ok(format),
        None => parse_value("defaults.output", &cfg.defaults.output),
    }
}

/// Color mode: flag > settings > auto.
pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> Result<ColorMode, CliError> {
    match global.color {
        Some(mode) => Ok(mode),
        None => parse_value("defaults.color", &cfg.defaults.color),
    }
}

/// Resolver options with the `--duplicate-addresses` override applied.
pub fn resolve_options(global: &GlobalOpts, cfg: &Config) -> ResolveOptions {
    let mut options = ResolveOptions::from(&cfg.resolve);
    if let Some(policy) = global.duplicate_addresses {
        options.duplicate_addresses = match policy {
            DuplicatePolicy::LastWins => DuplicateAddressPolicy::LastWins,
            DuplicatePolicy::Reject => DuplicateAddressPolicy::Reject,
        };
    }
    options
}

/// Inventory format forced by `--format`, if any.
pub fn inventory_format(global: &GlobalOpts) -> Option<InventoryFormat> {
    global.format.map(|f| match f {
        DocumentFormat::Json => InventoryFormat::Json,
        DocumentFormat::Yaml => InventoryFormat::Yaml,
        DocumentFormat::Toml => InventoryFormat::Toml,
    })
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
