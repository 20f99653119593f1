//! Interface construction: merging enumerated adapters with stored
//! configuration.

use thiserror::Error;

use crate::addr::Addr48;
use crate::config::{ConfigStore, InterfaceConfig, StoreError};
use crate::net::{Adapter, AdapterSource, SourceError};

use super::{InterfaceAddress, IpxInterface};

/// Node number reported by buggy versions of the Hamachi tunneling driver,
/// which fail to initialise it. The low four bytes get corrected from the
/// interface's first bound IPv4 address.
const HAMACHI_BUG_NODE: Addr48 = Addr48::new([0x7A, 0x79, 0x00, 0x00, 0x00, 0x00]);

/// Error type for a failed interface build.
///
/// A build either succeeds with a complete list or fails without producing
/// anything; the cache keeps its previous snapshot on failure.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Adapter enumeration failed.
    #[error("Adapter source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// A configuration store lookup failed.
    #[error("Configuration store unavailable: {0}")]
    ConfigUnavailable(#[from] StoreError),
}

/// Builds the IPX interface list from the current adapter set.
///
/// Each enabled adapter becomes one interface: its bindings are resolved
/// (the `0.0.0.0` sentinel is dropped silently), network/node numbers come
/// from the store, and the interface matching the store's primary
/// designation is placed first. Adapters whose configuration disables them
/// produce nothing. An empty adapter set builds an empty list.
///
/// # Errors
///
/// Fails as a whole on the first source or store error; no partial list is
/// ever returned.
pub fn build_interfaces<A, S>(source: &A, store: &S) -> Result<Vec<IpxInterface>, BuildError>
where
    A: AdapterSource + ?Sized,
    S: ConfigStore + ?Sized,
{
    let adapters = source.enumerate()?;
    let primary = store.primary_interface()?;

    let mut interfaces = Vec::with_capacity(adapters.len());
    let mut primary_placed = false;

    for adapter in adapters {
        let config = store.interface_config(adapter.hwaddr)?;

        if !config.enabled {
            tracing::debug!(hwaddr = %adapter.hwaddr, "Adapter disabled, skipping");
            continue;
        }

        let iface = build_interface(adapter, &config);

        if primary == Some(iface.hwaddr) && !primary_placed {
            // Primary interface, insert at the start of the list
            interfaces.insert(0, iface);
            primary_placed = true;
        } else {
            interfaces.push(iface);
        }
    }

    Ok(interfaces)
}

/// Builds one interface from an enabled adapter and its settings.
fn build_interface(adapter: Adapter, config: &InterfaceConfig) -> IpxInterface {
    let addresses: Vec<InterfaceAddress> = adapter
        .bindings
        .iter()
        .filter(|binding| !binding.address.is_unspecified())
        .map(|binding| InterfaceAddress::new(binding.address, binding.netmask))
        .collect();

    let mut iface = IpxInterface {
        hwaddr: adapter.hwaddr,
        network: config.network,
        node: config.node,
        addresses,
    };

    apply_hamachi_workaround(&mut iface);

    iface
}

/// Workaround for buggy versions of Hamachi that don't initialise the
/// interface node number correctly.
///
/// Must run after address resolution: the correction takes the low four
/// node bytes from the first bound IPv4 address, and an interface without
/// addresses is left untouched.
fn apply_hamachi_workaround(iface: &mut IpxInterface) {
    if iface.node != HAMACHI_BUG_NODE {
        return;
    }

    let Some(first) = iface.addresses.first() else {
        return;
    };

    tracing::warn!(
        hwaddr = %iface.hwaddr,
        "Invalid Hamachi interface detected, correcting node number"
    );

    let mut node = HAMACHI_BUG_NODE.octets();
    node[2..].copy_from_slice(&first.address.octets());
    iface.node = Addr48::new(node);
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
