//! In-memory configuration store.

use std::collections::HashMap;

use crate::addr::Addr48;

use super::{ConfigStore, InterfaceConfig, StoreError};

/// A configuration store held entirely in memory.
///
/// Used directly when no configuration file exists (every adapter gets
/// default settings), as the validated form behind [`FileStore`], and as
/// the base for test stores.
///
/// Lookups for addresses without stored settings fall back to
/// [`InterfaceConfig::default_for`], so a lookup never misses.
///
/// [`FileStore`]: super::FileStore
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    configs: HashMap<Addr48, InterfaceConfig>,
    primary: Option<Addr48>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores settings for a hardware address, replacing any previous ones.
    pub fn insert(&mut self, hwaddr: Addr48, config: InterfaceConfig) {
        self.configs.insert(hwaddr, config);
    }

    /// Removes stored settings, returning them if present.
    ///
    /// The address reverts to default settings afterwards.
    pub fn remove(&mut self, hwaddr: Addr48) -> Option<InterfaceConfig> {
        self.configs.remove(&hwaddr)
    }

    /// Sets or clears the primary hardware address designation.
    pub fn set_primary(&mut self, hwaddr: Option<Addr48>) {
        self.primary = hwaddr;
    }

    /// Returns the number of explicitly stored configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns true if no configurations are explicitly stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn interface_config(&self, hwaddr: Addr48) -> Result<InterfaceConfig, StoreError> {
        Ok(self
            .configs
            .get(&hwaddr)
            .copied()
            .unwrap_or_else(|| InterfaceConfig::default_for(hwaddr)))
    }

    fn primary_interface(&self) -> Result<Option<Addr48>, StoreError> {
        Ok(self.primary)
    }
}
