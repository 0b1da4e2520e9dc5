//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "dynect")]
pub mod dynect;
#[cfg(feature = "mock")]
pub mod mock;
#[cfg(feature = "ultradns")]
pub mod ultradns;

#[cfg(feature = "dynect")]
pub use dynect::DynEctProvider;
#[cfg(feature = "mock")]
pub use mock::{InMemoryRecordStore, MockProvider};
#[cfg(feature = "ultradns")]
pub use ultradns::UltraDnsProvider;
