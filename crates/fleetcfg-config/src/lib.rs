//! Shared configuration for fleetcfg.
//!
//! TOML settings (defaults + file + environment via figment), translation
//! to `fleetcfg_core::ResolveOptions`, and the file-based inventory source
//! that hands a parsed `Inventory` to the resolver.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use fleetcfg_core::{CoreError, DuplicateAddressPolicy, Inventory, InventoryFormat, ResolveOptions};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no inventory file configured")]
    NoInventory,

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Inventory document to resolve.
    pub inventory: Option<PathBuf>,

    /// Force a document format instead of guessing from the extension.
    pub format: Option<InventoryFormat>,

    /// Output defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Resolver behavior.
    #[serde(default)]
    pub resolve: ResolveSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ResolveSettings {
    /// `last-wins` or `reject`.
    #[serde(default)]
    pub duplicate_addresses: DuplicateAddressPolicy,

    /// Treat resolve warnings as failures in `check`.
    #[serde(default)]
    pub strict: bool,
}

impl From<&ResolveSettings> for ResolveOptions {
    fn from(settings: &ResolveSettings) -> Self {
        Self {
            duplicate_addresses: settings.duplicate_addresses,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "fleetcfg", "fleetcfg").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fleetcfg");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from an explicit file + environment.
///
/// Environment variables use the `FLEETCFG_` prefix with `__` between
/// nested keys, e.g. `FLEETCFG_RESOLVE__STRICT=true`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading settings");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FLEETCFG_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

// ── Inventory source ────────────────────────────────────────────────

/// Read and decode an inventory document.
///
/// `format` overrides detection; otherwise the extension decides and
/// anything unrecognized is read as JSON.
pub fn load_inventory(path: &Path, format: Option<InventoryFormat>) -> Result<Inventory, ConfigError> {
    let format = format
        .or_else(|| InventoryFormat::from_path(path))
        .unwrap_or_default();
    debug!(path = %path.display(), %format, "loading inventory");

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Inventory::parse(&text, format)?)
}

/// Load the inventory a `Config` points at. Either override, when given,
/// wins over the matching setting.
pub fn load_configured_inventory(
    cfg: &Config,
    path_override: Option<&Path>,
    format_override: Option<InventoryFormat>,
) -> Result<Inventory, ConfigError> {
    let path = path_override
        .or(cfg.inventory.as_deref())
        .ok_or(ConfigError::NoInventory)?;
    load_inventory(path, format_override.or(cfg.format))
}
