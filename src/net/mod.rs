//! Adapter discovery layer.
//!
//! This module provides types and traits for:
//! - Representing raw OS adapter snapshots ([`Adapter`], [`IpBinding`])
//! - Enumerating adapters ([`AdapterSource`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
pub mod platform;
mod source;

pub use adapter::{Adapter, IpBinding};
pub use source::{AdapterSource, SourceError};

#[cfg(test)]
pub use source::mock;
