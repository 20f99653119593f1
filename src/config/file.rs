//! TOML-backed configuration store.
//!
//! Defines the on-disk configuration file with serde: an optional
//! `primary` designation plus an `[interfaces."…"]` table keyed by
//! hardware address. The raw TOML form is validated into a
//! [`MemoryStore`] at load time, so lookups never touch the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::addr::{Addr32, Addr48, ParseAddrError};

use super::{ConfigStore, InterfaceConfig, MemoryStore, StoreError};

/// Error type for reading, parsing, or writing the configuration file.
#[derive(Debug, Error)]
pub enum FileStoreError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// An `[interfaces]` table key is not a valid hardware address.
    #[error("Invalid hardware address key '{key}': {source}")]
    InvalidHardwareAddress {
        /// The offending table key
        key: String,
        /// Underlying parse error
        #[source]
        source: ParseAddrError,
    },

    /// Failed to write the configuration file (for the init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Raw TOML form of the configuration file.
///
/// Interface table keys stay strings here; they are validated into
/// [`Addr48`] when building the store.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStore {
    /// Hardware address of the primary interface
    primary: Option<Addr48>,

    /// Per-adapter settings keyed by hardware address
    #[serde(default)]
    interfaces: HashMap<String, TomlInterface>,
}

/// Raw TOML form of one `[interfaces."…"]` entry.
///
/// All fields are optional; omitted ones take the same defaults an
/// unlisted adapter would get.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlInterface {
    /// Whether the adapter participates in IPX (default: true)
    enabled: Option<bool>,

    /// Assigned IPX network number, e.g. "00:00:00:01"
    network: Option<Addr32>,

    /// Assigned IPX node number, e.g. "08:00:27:AA:BB:CC"
    node: Option<Addr48>,
}

/// TOML-file-backed implementation of [`ConfigStore`].
///
/// # Example
///
/// ```no_run
/// use ipx_ifcache::config::FileStore;
///
/// let store = FileStore::load("ipx-ifcache.toml".as_ref()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: MemoryStore,
}

impl FileStore {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// or contains a malformed hardware-address key.
    pub fn load(path: &Path) -> Result<Self, FileStoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| FileStoreError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a hardware-address key
    /// is malformed.
    pub fn parse(content: &str) -> Result<Self, FileStoreError> {
        let raw: TomlStore = toml::from_str(content)?;

        let mut inner = MemoryStore::new();
        inner.set_primary(raw.primary);

        for (key, entry) in raw.interfaces {
            let hwaddr: Addr48 =
                key.parse()
                    .map_err(|source| FileStoreError::InvalidHardwareAddress {
                        key: key.clone(),
                        source,
                    })?;

            let defaults = InterfaceConfig::default_for(hwaddr);
            inner.insert(
                hwaddr,
                InterfaceConfig {
                    enabled: entry.enabled.unwrap_or(defaults.enabled),
                    network: entry.network.unwrap_or(defaults.network),
                    node: entry.node.unwrap_or(defaults.node),
                },
            );
        }

        Ok(Self { inner })
    }
}

impl ConfigStore for FileStore {
    fn interface_config(&self, hwaddr: Addr48) -> Result<InterfaceConfig, StoreError> {
        self.inner.interface_config(hwaddr)
    }

    fn primary_interface(&self) -> Result<Option<Addr48>, StoreError> {
        self.inner.primary_interface()
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ipx-ifcache Configuration File
# Documentation: https://github.com/doraemonkeys/ipx-ifcache

# Hardware address of the primary interface.
# The primary interface always sorts first in interface listings.
# primary = "08:00:27:AA:BB:CC"

# Per-adapter settings, keyed by hardware address. Adapters not listed
# here are enabled on network 00:00:00:01 with the hardware address as
# the node number.
#
# [interfaces."08:00:27:AA:BB:CC"]
# enabled = true
# network = "00:00:00:01"
# node = "08:00:27:AA:BB:CC"
#
# [interfaces."00:1C:42:00:00:08"]
# enabled = false
"#
    .to_string()
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), FileStoreError> {
    std::fs::write(path, default_config_template()).map_err(|e| FileStoreError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
