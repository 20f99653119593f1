//! Configuration store trait and per-interface settings.

use thiserror::Error;

use crate::addr::{Addr32, Addr48};

/// Per-adapter IPX settings held by a configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceConfig {
    /// Whether the adapter participates in IPX at all. Disabled adapters
    /// produce no interface.
    pub enabled: bool,
    /// The assigned IPX network number.
    pub network: Addr32,
    /// The assigned IPX node number.
    pub node: Addr48,
}

impl InterfaceConfig {
    /// Network number assigned to adapters with no stored configuration.
    pub const DEFAULT_NETWORK: Addr32 = Addr32::new(1);

    /// Returns the settings used for an adapter absent from the store:
    /// enabled, on the default network, with the hardware address as the
    /// node number.
    #[must_use]
    pub const fn default_for(hwaddr: Addr48) -> Self {
        Self {
            enabled: true,
            network: Self::DEFAULT_NETWORK,
            node: hwaddr,
        }
    }
}

/// Error type for configuration store lookups.
///
/// The interface cache treats store failure exactly like adapter-source
/// failure: transient, stale-preserving, retried on the next read.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or read.
    #[error("Configuration store unavailable: {message}")]
    Unavailable {
        /// Description of the underlying failure.
        message: String,
    },
}

/// Trait for resolving per-adapter configuration.
///
/// # Design
///
/// - Lookups for unknown hardware addresses succeed with
///   [`InterfaceConfig::default_for`]; absence is not an error.
/// - Implementations are called while the interface cache holds its lock
///   and must not call back into the cache.
pub trait ConfigStore: Send + Sync {
    /// Returns the settings for the given hardware address.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store itself fails, not
    /// when the address merely has no stored settings.
    fn interface_config(&self, hwaddr: Addr48) -> Result<InterfaceConfig, StoreError>;

    /// Returns the hardware address designated as primary, if any.
    ///
    /// The primary interface always sorts first in built interface lists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store itself fails.
    fn primary_interface(&self) -> Result<Option<Addr48>, StoreError>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for &T {
    fn interface_config(&self, hwaddr: Addr48) -> Result<InterfaceConfig, StoreError> {
        (**self).interface_config(hwaddr)
    }

    fn primary_interface(&self) -> Result<Option<Addr48>, StoreError> {
        (**self).primary_interface()
    }
}

/// Mock configuration store for testing.
///
/// Shared by the builder and cache tests, which need scripted settings and
/// a store that can be made to fail.
#[cfg(test)]
pub mod mock {
    use super::{Addr48, ConfigStore, InterfaceConfig, StoreError};
    use crate::config::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A mock store over [`MemoryStore`] that can be scripted to fail,
    /// either immediately or after a number of successful builds.
    #[derive(Debug, Default)]
    pub struct MockConfigStore {
        inner: MemoryStore,
        /// Number of builds to serve before failing; `None` never fails.
        /// A build is counted by its `primary_interface` call.
        fail_after_builds: Option<usize>,
        builds: AtomicUsize,
    }

    impl MockConfigStore {
        /// Creates an empty mock store (all lookups yield defaults).
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds settings for a hardware address.
        #[must_use]
        pub fn with_config(mut self, hwaddr: Addr48, config: InterfaceConfig) -> Self {
            self.inner.insert(hwaddr, config);
            self
        }

        /// Designates the primary hardware address.
        #[must_use]
        pub fn with_primary(mut self, hwaddr: Addr48) -> Self {
            self.inner.set_primary(Some(hwaddr));
            self
        }

        /// Makes every lookup fail with [`StoreError::Unavailable`].
        #[must_use]
        pub fn failing(self) -> Self {
            self.failing_after(0)
        }

        /// Serves `builds` complete builds, then fails.
        #[must_use]
        pub fn failing_after(mut self, builds: usize) -> Self {
            self.fail_after_builds = Some(builds);
            self
        }

        fn unavailable() -> StoreError {
            StoreError::Unavailable {
                message: "store offline".to_string(),
            }
        }

        fn exhausted(&self) -> bool {
            self.fail_after_builds
                .is_some_and(|limit| self.builds.load(Ordering::SeqCst) > limit)
        }
    }

    impl ConfigStore for MockConfigStore {
        fn interface_config(&self, hwaddr: Addr48) -> Result<InterfaceConfig, StoreError> {
            if self.exhausted() {
                return Err(Self::unavailable());
            }
            self.inner.interface_config(hwaddr)
        }

        fn primary_interface(&self) -> Result<Option<Addr48>, StoreError> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            if self.exhausted() {
                return Err(Self::unavailable());
            }
            self.inner.primary_interface()
        }
    }
}
