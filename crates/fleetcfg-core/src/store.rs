// ── Config accessor ──
//
// Read-only facade over the last successful resolve. The resolution is
// published as one immutable `Arc` snapshot, so any number of collector
// connections can read it concurrently without locking.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::info;

use crate::config::ResolveOptions;
use crate::error::CoreError;
use crate::model::{ConfigGroup, Inventory, TagMap};
use crate::resolve::{Resolution, resolve_with};
use crate::warning::{TracingSink, WarningSink};

/// What the telemetry collector asks of its configuration source.
pub trait ConfigProvider: Send + Sync {
    /// Config groups for `addresses`, or every group for an empty slice.
    fn config_groups(&self, addresses: &[String]) -> Result<Vec<ConfigGroup>, CoreError>;

    /// Resolved tags for `address`. Unknown addresses yield an empty map.
    fn tags(&self, address: &str) -> Result<TagMap, CoreError>;
}

/// Holds the published resolution. Starts uninitialized; every query fails
/// with `CoreError::NotInitialized` until `load` has succeeded once.
#[derive(Debug, Default)]
pub struct ConfigStore {
    options: ResolveOptions,
    current: ArcSwapOption<Resolution>,
}

impl ConfigStore {
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            current: ArcSwapOption::empty(),
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve `inventory` and publish the result, logging warnings via
    /// `tracing`.
    pub fn load(&self, inventory: &Inventory) -> Result<Arc<Resolution>, CoreError> {
        self.load_with(inventory, &mut TracingSink)
    }

    /// Resolve `inventory` with a caller-supplied warning sink.
    ///
    /// On error nothing is published and any earlier resolution stays in
    /// place.
    pub fn load_with(
        &self,
        inventory: &Inventory,
        sink: &mut dyn WarningSink,
    ) -> Result<Arc<Resolution>, CoreError> {
        let resolution = Arc::new(resolve_with(inventory, &self.options, sink)?);
        info!(
            devices = resolution.device_count,
            groups = resolution.groups.len(),
            warnings = resolution.warnings.len(),
            "device configuration published"
        );
        self.current.store(Some(Arc::clone(&resolution)));
        Ok(resolution)
    }

    pub fn is_initialized(&self) -> bool {
        self.current.load().is_some()
    }

    /// The published resolution.
    pub fn snapshot(&self) -> Result<Arc<Resolution>, CoreError> {
        self.current.load_full().ok_or(CoreError::NotInitialized)
    }
}

impl ConfigProvider for ConfigStore {
    fn config_groups(&self, addresses: &[String]) -> Result<Vec<ConfigGroup>, CoreError> {
        Ok(self.snapshot()?.groups_for(addresses))
    }

    fn tags(&self, address: &str) -> Result<TagMap, CoreError> {
        Ok(self.snapshot()?.tags.tags(address))
    }
}
