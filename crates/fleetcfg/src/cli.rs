//! Clap derive structures for the `fleetcfg` CLI.
//!
//! Also compiled by `build.rs` for man page generation, so this file may
//! only depend on clap, clap_complete and std.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fleetcfg -- inspect resolved gNMI device configuration
#[derive(Debug, Parser)]
#[command(
    name = "fleetcfg",
    version,
    about = "Resolve device inventories into gNMI collector configuration",
    long_about = "Expands a declarative device inventory (shared subscriptions, tag sets\n\
        and common-config templates) into per-group collector configuration\n\
        and per-address tags, and reports dangling references.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Settings file (defaults to the platform config path)
    #[arg(long, env = "FLEETCFG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Inventory document (overrides settings)
    #[arg(long, short = 'i', env = "FLEETCFG_INVENTORY", global = true)]
    pub inventory: Option<PathBuf>,

    /// Inventory format (default: from file extension)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<DocumentFormat>,

    /// Output format (default: from settings, else table)
    #[arg(long, short = 'o', env = "FLEETCFG_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// How to treat devices sharing an address (overrides settings)
    #[arg(long, global = true)]
    pub duplicate_addresses: Option<DuplicatePolicy>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log lines as JSON objects on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicatePolicy {
    /// Keep the last device record for an address
    LastWins,
    /// Fail when two devices share an address
    Reject,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List resolved configuration groups
    #[command(alias = "g")]
    Groups(GroupsArgs),

    /// Show the resolved tags for a device address
    #[command(alias = "t")]
    Tags(TagsArgs),

    /// Resolve the inventory and report warnings
    Check(CheckArgs),

    /// Manage fleetcfg settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GroupsArgs {
    /// Only groups containing these addresses (members narrowed to them)
    pub addresses: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TagsArgs {
    /// Device address
    pub address: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Exit non-zero if any warning was reported
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a settings file with defaults (records --inventory if given)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved settings
    Show,

    /// Print the settings file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
