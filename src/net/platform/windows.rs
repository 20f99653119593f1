//! Windows-specific adapter enumeration using `GetAdaptersInfo`.

use crate::addr::Addr48;
use crate::net::{Adapter, AdapterSource, IpBinding, SourceError};
use std::net::Ipv4Addr;
use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, ERROR_NO_DATA, ERROR_SUCCESS, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{GetAdaptersInfo, IP_ADAPTER_INFO, IP_ADDR_STRING};

/// Buffer size hint for `GetAdaptersInfo`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Hardware address length for Ethernet-style adapters. Adapters reporting
/// a different length (e.g. PPP links) carry no usable 48-bit address.
const ETHERNET_ADDRESS_LENGTH: u32 = 6;

/// Windows implementation of [`AdapterSource`] using `GetAdaptersInfo`.
///
/// Retrieves all IPv4-capable adapters with their bound address/netmask
/// pairs from the Windows networking stack.
///
/// # Example
///
/// ```no_run
/// use ipx_ifcache::net::{AdapterSource, platform::WindowsAdapterSource};
///
/// let source = WindowsAdapterSource::new();
/// let adapters = source.enumerate().expect("Failed to enumerate adapters");
///
/// for adapter in adapters {
///     println!("{}: {} bindings", adapter.hwaddr, adapter.bindings.len());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsAdapterSource {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl WindowsAdapterSource {
    /// Creates a new Windows adapter source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterSource for WindowsAdapterSource {
    fn enumerate(&self) -> Result<Vec<Adapter>, SourceError> {
        enumerate_adapters()
    }
}

/// Enumerates all adapters via `GetAdaptersInfo`.
fn enumerate_adapters() -> Result<Vec<Adapter>, SourceError> {
    let Some(table) = load_adapter_table()? else {
        tracing::warn!("No network adapters detected");
        return Ok(Vec::new());
    };

    let mut adapters = Vec::new();
    // SAFETY: GetAdaptersInfo returns a properly aligned buffer for
    // IP_ADAPTER_INFO; the records form an intrusive linked list whose
    // pointers all target the same buffer, valid while `table` is alive.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = table.as_ptr().cast::<IP_ADAPTER_INFO>();

    while !current.is_null() {
        let info = unsafe { &*current };

        if let Some(adapter) = parse_adapter(info) {
            adapters.push(adapter);
        }

        current = info.Next;
    }

    Ok(adapters)
}

/// Calls `GetAdaptersInfo`, growing the buffer until the table fits.
///
/// Returns `None` when the system reports no adapters (`ERROR_NO_DATA`),
/// which is a valid outcome rather than a failure.
///
/// # Coverage Note
///
/// Excluded from coverage: the overflow retry requires more adapters than
/// the initial capacity, and the error path requires an actual API failure.
#[cfg(not(tarpaulin_include))]
fn load_adapter_table() -> Result<Option<Vec<u8>>, SourceError> {
    let mut size = INITIAL_BUFFER_SIZE;
    let mut buffer: Vec<u8> = vec![0u8; size as usize];

    loop {
        // SAFETY: We provide a valid buffer and size. The function writes
        // adapter records to the buffer and updates `size` with the
        // required length on overflow.
        let result = unsafe {
            GetAdaptersInfo(Some(buffer.as_mut_ptr().cast()), &raw mut size)
        };

        match WIN32_ERROR(result) {
            ERROR_SUCCESS => return Ok(Some(buffer)),
            ERROR_NO_DATA => return Ok(None),
            ERROR_BUFFER_OVERFLOW => buffer.resize(size as usize, 0),
            err => {
                return Err(SourceError::WindowsApi(
                    windows::core::Error::from_hresult(err.to_hresult()),
                ));
            }
        }
    }
}

/// Converts one `IP_ADAPTER_INFO` record into an [`Adapter`].
///
/// Returns `None` for adapters without a 6-byte hardware address.
fn parse_adapter(info: &IP_ADAPTER_INFO) -> Option<Adapter> {
    if info.AddressLength != ETHERNET_ADDRESS_LENGTH {
        return None;
    }

    let mut hwaddr = [0u8; 6];
    hwaddr.copy_from_slice(&info.Address[..6]);

    let mut bindings = Vec::new();
    let mut current = std::ptr::from_ref::<IP_ADDR_STRING>(&info.IpAddressList);

    // SAFETY: IpAddressList is the inline head of a linked list whose Next
    // pointers target the same GetAdaptersInfo buffer.
    while !current.is_null() {
        let entry = unsafe { &*current };

        if let (Some(address), Some(netmask)) = (
            parse_address_string(&entry.IpAddress.String),
            parse_address_string(&entry.IpMask.String),
        ) {
            bindings.push(IpBinding::new(address, netmask));
        }

        current = entry.Next;
    }

    Some(Adapter::new(Addr48::new(hwaddr), bindings))
}

/// Parses a NUL-terminated dotted-quad string from an `IP_ADDRESS_STRING`.
fn parse_address_string(raw: &[i8; 16]) -> Option<Ipv4Addr> {
    let len = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
    #[allow(clippy::cast_sign_loss)]
    let bytes: Vec<u8> = raw[..len].iter().map(|&c| c as u8).collect();

    std::str::from_utf8(&bytes).ok()?.parse().ok()
}
