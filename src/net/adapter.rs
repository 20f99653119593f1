//! Raw adapter types as reported by the operating system.

use std::net::Ipv4Addr;

use crate::addr::Addr48;

/// A single IP/netmask pair bound to an adapter.
///
/// This is the raw form reported by the OS. The all-zeros sentinel address
/// (`0.0.0.0`, used by Windows for adapters with no IP binding) is passed
/// through here and dropped later by the interface builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpBinding {
    /// The bound IPv4 address.
    pub address: Ipv4Addr,
    /// The subnet mask for the binding.
    pub netmask: Ipv4Addr,
}

impl IpBinding {
    /// Creates a new binding.
    #[must_use]
    pub const fn new(address: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        Self { address, netmask }
    }
}

/// A snapshot of a single network adapter at enumeration time.
///
/// Adapters are consumed once per cache refresh and discarded; they carry
/// no identity beyond the hardware address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    /// The adapter's hardware (MAC) address.
    pub hwaddr: Addr48,
    /// IP/netmask pairs bound to the adapter, in OS report order.
    pub bindings: Vec<IpBinding>,
}

impl Adapter {
    /// Creates a new adapter snapshot.
    #[must_use]
    pub const fn new(hwaddr: Addr48, bindings: Vec<IpBinding>) -> Self {
        Self { hwaddr, bindings }
    }

    /// Returns true if the adapter reported any bindings.
    #[must_use]
    pub fn has_bindings(&self) -> bool {
        !self.bindings.is_empty()
    }
}
