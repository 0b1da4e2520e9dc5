//! # geodns-provider
//!
//! A provider-agnostic view of geo (directional) DNS record sets across DNS vendors
//! whose native geo models do not line up.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Native geo model |
//! |----------|-------------|------------------|
//! | In-memory mock | `mock` | record sets with a `geo` config entry |
//! | UltraDNS | `ultradns` | directional pools of per-group records, regrouped by name/type/ttl/group |
//! | `DynECT` | `dynect` | geo services linking nodes to region groups, exploded per node |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: Enable all providers listed above.
//! - **`mock`**, **`ultradns`**, **`dynect`**: Enable a single provider.
//!
//! ## Usage
//!
//! ```rust
//! use futures::TryStreamExt;
//! use geodns_provider::{
//!     create_provider, DnsProvider, ProviderBackend, ReadOnlyRecordSetApi, RecordSet,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> geodns_provider::Result<()> {
//! let provider = create_provider(ProviderBackend::Mock { store: None })?;
//!
//! // `None` when the provider has no geo routing at all
//! let geo = provider.geo_record_set_api("denominator.io.").await?.unwrap();
//!
//! let cnames: Vec<RecordSet> = geo
//!     .list_by_name_and_type("www.geo.denominator.io.", "CNAME")?
//!     .try_collect()
//!     .await?;
//! for rrset in &cnames {
//!     let geo = rrset.geo().unwrap();
//!     println!("{} -> {} {}", rrset.name(), geo.group_name(), geo.territories_display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Laziness
//!
//! Listing methods return a [`RecordSetStream`]. Arguments are checked when the method is
//! called; vendor calls happen only as the stream is polled, so large or paged vendor
//! listings are never materialized up front.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidParameter`]: a required argument was empty
//! - [`ProviderError::InvalidRecordSet`]: a record set broke a construction invariant
//! - [`ProviderError::ZoneNotFound`]: raised by the per-zone factories, never mid-stream
//! - [`ProviderError::ParseError`]: vendor data could not be interpreted
//!
//! Vendor failures (`NetworkError`, `Timeout`, `RateLimited`, ...) are passed through
//! unchanged. Nothing is retried and a failing listing is never truncated silently.

mod concat;
mod error;
mod factory;
mod grouping;
mod model;
mod providers;
mod territory;
mod traits;
mod types;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{ProviderBackend, create_provider, get_all_provider_metadata};

// Re-export traits
pub use traits::{
    DnsProvider, GeoRecordSetApi, ReadOnlyRecordSetApi, RecordSetApi, RecordSetApiFactory,
};

// Re-export model and types
pub use model::{
    ConfigValue, GEO_CONFIG_KEY, GeoConfig, MAX_NAME_LENGTH, MAX_TTL, RecordData, RecordSet,
    RecordSetBuilder, group_name_equal_to, name_and_type_equal_to,
};
pub use types::{ProviderFeatures, ProviderMetadata, ProviderType, RecordSetStream};

// Re-export the engines for vendor adapters living outside this crate
pub use concat::ConcatRecordSets;
pub use grouping::{DirectionalGroup, DirectionalRecord, GroupGeoRecords, sort_for_grouping};
pub use territory::{TerritoryLoader, TerritoryResolver};

pub use providers::common::{parse_rdata, parse_rdata_text};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "mock")]
pub use providers::mock;
#[cfg(feature = "mock")]
pub use providers::{InMemoryRecordStore, MockProvider};

#[cfg(feature = "ultradns")]
pub use providers::UltraDnsProvider;
#[cfg(feature = "ultradns")]
pub use providers::ultradns;

#[cfg(feature = "dynect")]
pub use providers::DynEctProvider;
#[cfg(feature = "dynect")]
pub use providers::dynect;
