//! IPX interface domain model, builder, and cache.
//!
//! This module provides:
//! - The interface domain types ([`IpxInterface`], [`InterfaceAddress`])
//! - Construction of the interface list from adapters plus configuration
//!   ([`build_interfaces`])
//! - The refresh-on-expiry cache serving deep-copied snapshots
//!   ([`InterfaceCache`])

mod build;
mod cache;
mod types;

pub use build::{BuildError, build_interfaces};
pub use cache::{DEFAULT_TTL, InterfaceCache};
pub use types::{InterfaceAddress, IpxInterface};
