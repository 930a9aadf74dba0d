//! Shared helpers for command handlers.

use fleetcfg_core::{ConfigStore, TracingSink, WarningSink};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Settings, resolved output preferences and a loaded `ConfigStore`.
pub struct Session {
    pub settings: Config,
    pub store: ConfigStore,
    pub output: OutputFormat,
    pub color: bool,
}

impl Session {
    /// Load settings and the inventory, resolving it with warnings logged
    /// through `tracing`.
    pub fn open(global: &GlobalOpts) -> Result<Self, CliError> {
        Self::open_with(global, &mut TracingSink)
    }

    /// Same as [`Session::open`] but discards warnings as they happen.
    /// They remain available on the store's snapshot.
    pub fn open_quietly(global: &GlobalOpts) -> Result<Self, CliError> {
        Self::open_with(global, &mut ())
    }

    fn open_with(global: &GlobalOpts, sink: &mut dyn WarningSink) -> Result<Self, CliError> {
        let settings = config::load(global)?;
        let output = config::output_format(global, &settings)?;
        let color = output::should_color(config::color_mode(global, &settings)?);

        let inventory = config::load_configured_inventory(
            &settings,
            global.inventory.as_deref(),
            config::inventory_format(global),
        )?;

        let store = ConfigStore::new(config::resolve_options(global, &settings));
        store.load_with(&inventory, sink)?;

        Ok(Self {
            settings,
            store,
            output,
            color,
        })
    }
}

/// Join a list for a table cell, with a dash for nothing.
pub fn cell<I, S>(items: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(sep);
    if joined.is_empty() { "-".into() } else { joined }
}
