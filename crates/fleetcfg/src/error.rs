//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` / `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use fleetcfg_config::ConfigError;
use fleetcfg_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const INVENTORY: i32 = 4;
    pub const WARNINGS: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Inventory ────────────────────────────────────────────────────
    #[error("No inventory document given")]
    #[diagnostic(
        code(fleetcfg::no_inventory),
        help(
            "Pass --inventory <FILE>, set FLEETCFG_INVENTORY,\n\
             or set `inventory` in {config_path}"
        )
    )]
    NoInventory { config_path: String },

    #[error("Could not access {}", path.display())]
    #[diagnostic(code(fleetcfg::file_access))]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Inventory is malformed: {message}")]
    #[diagnostic(
        code(fleetcfg::inventory_parse),
        help("The document was read as {format}. Use --format to pick another parser.")
    )]
    InventoryParse { format: String, message: String },

    #[error("Address {address} is used by more than one device")]
    #[diagnostic(
        code(fleetcfg::duplicate_address),
        help("Fix the inventory, or allow it with --duplicate-addresses last-wins.")
    )]
    DuplicateAddress { address: String },

    #[error("{count} resolve warning(s) reported")]
    #[diagnostic(
        code(fleetcfg::warnings),
        help("Strict mode is on. Fix the references above or run without --strict.")
    )]
    WarningsFound { count: usize },

    #[error("Device configuration was queried before it was resolved")]
    #[diagnostic(code(fleetcfg::not_initialized))]
    NotInitialized,

    // ── Configuration ────────────────────────────────────────────────
    #[error("Settings file already exists at {path}")]
    #[diagnostic(
        code(fleetcfg::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fleetcfg::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(fleetcfg::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Could not render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInventory { .. }
            | Self::FileAccess { .. }
            | Self::InventoryParse { .. }
            | Self::DuplicateAddress { .. } => exit_code::INVENTORY,
            Self::WarningsFound { .. } => exit_code::WARNINGS,
            Self::ConfigExists { .. } | Self::Config(_) => exit_code::CONFIG,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Parse { format, message } => CliError::InventoryParse {
                format: format.to_string(),
                message,
            },
            CoreError::DuplicateAddress { address } => CliError::DuplicateAddress { address },
            CoreError::NotInitialized => CliError::NotInitialized,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoInventory => CliError::NoInventory {
                config_path: fleetcfg_config::config_path().display().to_string(),
            },
            ConfigError::Io { path, source } => CliError::FileAccess { path, source },
            ConfigError::Serialization(e) => CliError::Toml(e),
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Core(e) => e.into(),
        }
    }
}
