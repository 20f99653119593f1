//! ipx-ifcache: Virtual IPX Interface Cache
//!
//! A library for discovering host network adapters, merging them with
//! per-adapter IPX configuration, and serving thread-safe, time-bounded
//! snapshots of the resulting interface set.

pub mod addr;
pub mod config;
pub mod iface;
pub mod net;
pub mod time;
