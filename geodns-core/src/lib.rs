//! geodns Core Library
//!
//! Service layer on top of `geodns-provider`, including:
//! - Provider registry keyed by provider id
//! - Geo record queries (`GeoRecordService`) for a command-line style front end
//! - Text rendering of record sets, one line per rdata value
//!
//! The library never installs a logger; failures surfaced by the services are logged
//! through the `log` facade at `warn` or `error` depending on [`CoreError::is_expected`].

pub mod error;
pub mod render;
pub mod services;
pub mod traits;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use render::{record_set_lines, render_geo_record_set, render_record_set};
pub use services::{GeoRecordService, ProviderMetadataService, ServiceContext};
pub use traits::{InMemoryProviderRegistry, ProviderRegistry};
