//! Adapter enumeration trait and error types.

use super::Adapter;
use thiserror::Error;

/// Error type for adapter enumeration.
///
/// Describes what went wrong without dictating recovery strategy. The
/// interface cache treats every variant as transient and keeps serving its
/// previous snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating the host's network adapters.
///
/// # Design
///
/// - A host with no adapters is `Ok(vec![])`, not an error; the two
///   outcomes drive different cache behavior (empty-but-fresh vs stale).
/// - Enables dependency injection for testing with mock implementations.
/// - Implementations are called while the interface cache holds its lock
///   and must not call back into the cache.
pub trait AdapterSource: Send + Sync {
    /// Returns a snapshot of all network adapters on the system.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the underlying platform API fails.
    /// "No adapters" is a successful empty result, never an error.
    fn enumerate(&self) -> Result<Vec<Adapter>, SourceError>;
}

impl<T: AdapterSource + ?Sized> AdapterSource for &T {
    fn enumerate(&self) -> Result<Vec<Adapter>, SourceError> {
        (**self).enumerate()
    }
}
