//! Platform-specific adapter source implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`AdapterSource`] trait.
//!
//! # Platform Support
//!
//! - **Windows**: Uses `GetAdaptersInfo` API via the `windows` crate.
//! - **Linux**: Planned for future (netlink).
//!
//! [`AdapterSource`]: super::AdapterSource

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsAdapterSource;

// Re-export platform-specific source as PlatformSource for convenience
#[cfg(windows)]
pub use windows::WindowsAdapterSource as PlatformSource;
