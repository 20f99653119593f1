//! Core domain types for IPX interfaces.

use std::net::Ipv4Addr;

use crate::addr::{Addr32, Addr48};

/// One resolved IP binding on an IPX interface.
///
/// The broadcast address is derived at construction (`address | !netmask`)
/// and the value is never rebuilt afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// The bound IPv4 address.
    pub address: Ipv4Addr,
    /// The subnet mask for the binding.
    pub netmask: Ipv4Addr,
    /// The derived broadcast address.
    pub broadcast: Ipv4Addr,
}

impl InterfaceAddress {
    /// Creates an address entry, deriving the broadcast address.
    #[must_use]
    pub fn new(address: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        let broadcast = Ipv4Addr::from(u32::from(address) | !u32::from(netmask));
        Self {
            address,
            netmask,
            broadcast,
        }
    }
}

/// A virtual IPX-addressable endpoint derived from one host adapter plus
/// its stored configuration.
///
/// # Ownership
///
/// The cache hands out interfaces only by value; `Clone` performs a full
/// deep copy (the address list is owned), so callers may mutate or drop
/// their copy without affecting the cache or other callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpxInterface {
    /// Hardware address of the underlying adapter; unique within one
    /// cache generation.
    pub hwaddr: Addr48,
    /// The assigned IPX network number.
    pub network: Addr32,
    /// The assigned IPX node number.
    pub node: Addr48,
    /// Resolved IP bindings in adapter report order. May be empty: an
    /// interface without IP bindings is still valid.
    pub addresses: Vec<InterfaceAddress>,
}

impl IpxInterface {
    /// Returns true if the interface has at least one resolved binding.
    #[must_use]
    pub fn has_addresses(&self) -> bool {
        !self.addresses.is_empty()
    }
}
