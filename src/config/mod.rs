//! Configuration store layer.
//!
//! This module provides:
//! - The store trait consumed by the interface builder ([`ConfigStore`])
//! - Per-adapter settings ([`InterfaceConfig`])
//! - An in-memory store ([`MemoryStore`])
//! - A TOML-file-backed store ([`FileStore`])
//! - Configuration file generation ([`write_default_config`])
//!
//! Adapters without stored settings resolve to defaults (enabled, network
//! `00:00:00:01`, node number equal to the hardware address), so a store
//! lookup distinguishes "store failed" from "nothing stored".

mod file;
mod memory;
mod store;

pub use file::{FileStore, FileStoreError, default_config_template, write_default_config};
pub use memory::MemoryStore;
pub use store::{ConfigStore, InterfaceConfig, StoreError};

#[cfg(test)]
pub use store::mock;
