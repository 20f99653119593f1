//! The interface cache: refresh-on-expiry snapshots behind a single lock.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

use crate::addr::{Addr32, Addr48};
use crate::config::ConfigStore;
use crate::net::AdapterSource;
use crate::time::{Clock, SystemClock};

use super::build::build_interfaces;
use super::IpxInterface;

/// Snapshot age beyond which the next read triggers a rebuild.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// The cache's guarded state: the authoritative interface list and the
/// instant of the last successful rebuild.
#[derive(Debug)]
struct Snapshot {
    interfaces: Vec<IpxInterface>,
    /// `None` until the first successful build, so the first read always
    /// triggers one.
    refreshed_at: Option<SystemTime>,
}

/// A thread-safe, time-bounded cache of the host's IPX interfaces.
///
/// Every read operation runs check-then-rebuild-then-copy inside one
/// critical section: the snapshot is rebuilt from the adapter source and
/// configuration store when older than the TTL, and results cross the API
/// boundary only as deep copies. When a rebuild fails, the previous
/// snapshot keeps being served and the next read retries.
///
/// Dropping the cache releases the snapshot; [`shutdown`] makes the end of
/// its lifetime explicit, and any use afterwards is a compile error.
///
/// # Type Parameters
///
/// * `A` - The [`AdapterSource`] enumerating host adapters
/// * `S` - The [`ConfigStore`] resolving per-adapter settings
/// * `C` - The [`Clock`] measuring snapshot age (defaults to [`SystemClock`])
///
/// # Example
///
/// ```ignore
/// use ipx_ifcache::iface::InterfaceCache;
/// use ipx_ifcache::net::platform::PlatformSource;
///
/// let cache = InterfaceCache::new(PlatformSource::new(), store);
/// for iface in cache.list() {
///     println!("{} on network {}", iface.node, iface.network);
/// }
/// cache.shutdown();
/// ```
///
/// [`shutdown`]: InterfaceCache::shutdown
pub struct InterfaceCache<A, S, C = SystemClock> {
    source: A,
    store: S,
    clock: C,
    ttl: Duration,
    state: Mutex<Snapshot>,
}

impl<A, S> InterfaceCache<A, S, SystemClock>
where
    A: AdapterSource,
    S: ConfigStore,
{
    /// Creates a cache with the system clock and the default TTL.
    ///
    /// The initial snapshot is empty and already expired, so the first
    /// read builds it.
    #[must_use]
    pub const fn new(source: A, store: S) -> Self {
        Self::with_clock(source, store, SystemClock)
    }
}

impl<A, S, C> InterfaceCache<A, S, C>
where
    A: AdapterSource,
    S: ConfigStore,
    C: Clock,
{
    /// Creates a cache with a custom clock.
    ///
    /// This constructor allows injecting a mock clock for testing.
    #[must_use]
    pub const fn with_clock(source: A, store: S, clock: C) -> Self {
        Self {
            source,
            store,
            clock,
            ttl: DEFAULT_TTL,
            state: Mutex::new(Snapshot {
                interfaces: Vec::new(),
                refreshed_at: None,
            }),
        }
    }

    /// Overrides the snapshot TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the configured snapshot TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a deep copy of the full interface list.
    ///
    /// The primary interface, if present, is the first element.
    #[must_use]
    pub fn list(&self) -> Vec<IpxInterface> {
        self.refreshed_state().interfaces.clone()
    }

    /// Returns a deep copy of the first interface matching the given
    /// network and node numbers, or `None` if no interface matches.
    #[must_use]
    pub fn find_by_address(&self, network: Addr32, node: Addr48) -> Option<IpxInterface> {
        self.refreshed_state()
            .interfaces
            .iter()
            .find(|iface| iface.network == network && iface.node == node)
            .cloned()
    }

    /// Returns a deep copy of the interface at the given 0-based position
    /// (primary first), or `None` if the index is out of range.
    #[must_use]
    pub fn find_by_index(&self, index: usize) -> Option<IpxInterface> {
        self.refreshed_state().interfaces.get(index).cloned()
    }

    /// Returns the number of interfaces in the current snapshot.
    #[must_use]
    pub fn count(&self) -> usize {
        self.refreshed_state().interfaces.len()
    }

    /// Consumes the cache, releasing the snapshot.
    ///
    /// Ownership makes use-after-shutdown unrepresentable; this method
    /// only marks the end of the cache's lifetime explicitly.
    pub fn shutdown(self) {
        drop(self);
    }

    /// Locks the state, rebuilding the snapshot first if it is stale.
    ///
    /// On rebuild failure the previous snapshot and its timestamp are kept,
    /// so readers keep getting last-known-good data and the next call
    /// retries the build.
    fn refreshed_state(&self) -> MutexGuard<'_, Snapshot> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.is_stale(&state) {
            match build_interfaces(&self.source, &self.store) {
                Ok(interfaces) => {
                    state.interfaces = interfaces;
                    state.refreshed_at = Some(self.clock.now());
                }
                Err(e) => {
                    tracing::warn!("Interface rebuild failed, serving previous snapshot: {e}");
                }
            }
        }

        state
    }

    /// Returns true if the snapshot is missing or older than the TTL.
    fn is_stale(&self, state: &Snapshot) -> bool {
        state.refreshed_at.is_none_or(|at| {
            self.clock
                .now()
                .duration_since(at)
                .is_ok_and(|age| age > self.ttl)
        })
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
