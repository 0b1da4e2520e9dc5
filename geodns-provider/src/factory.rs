//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
#[cfg(any(feature = "ultradns", feature = "dynect"))]
use crate::traits::RecordSetApiFactory;
use crate::types::{ProviderMetadata, ProviderType};

#[cfg(feature = "dynect")]
use crate::providers::DynEctProvider;
#[cfg(feature = "dynect")]
use crate::providers::dynect::GeoServiceClient;
#[cfg(feature = "mock")]
use crate::providers::{InMemoryRecordStore, MockProvider};
#[cfg(feature = "ultradns")]
use crate::providers::UltraDnsProvider;
#[cfg(feature = "ultradns")]
use crate::providers::ultradns::DirectionalPoolClient;

/// Everything needed to construct one provider.
///
/// Vendor variants carry the vendor client (transport lives behind it) and, optionally,
/// the source of the zone's plain record sets.
#[derive(Clone)]
pub enum ProviderBackend {
    /// In-memory provider. `None` loads the `denominator.io.` demonstration zone.
    #[cfg(feature = "mock")]
    Mock { store: Option<InMemoryRecordStore> },
    #[cfg(feature = "ultradns")]
    UltraDns {
        client: Arc<dyn DirectionalPoolClient>,
        record_sets: Option<Arc<dyn RecordSetApiFactory>>,
    },
    #[cfg(feature = "dynect")]
    DynEct {
        client: Arc<dyn GeoServiceClient>,
        record_sets: Option<Arc<dyn RecordSetApiFactory>>,
    },
}

impl ProviderBackend {
    /// The provider type this backend builds.
    pub fn provider_type(&self) -> ProviderType {
        // by value: with no provider feature enabled the enum is empty
        match *self {
            #[cfg(feature = "mock")]
            Self::Mock { .. } => ProviderType::Mock,
            #[cfg(feature = "ultradns")]
            Self::UltraDns { .. } => ProviderType::UltraDns,
            #[cfg(feature = "dynect")]
            Self::DynEct { .. } => ProviderType::DynEct,
        }
    }
}

/// Creates a [`DnsProvider`] instance from the given backend.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust
/// use geodns_provider::{create_provider, DnsProvider, ProviderBackend};
///
/// let provider = create_provider(ProviderBackend::Mock { store: None }).unwrap();
/// assert_eq!(provider.id(), "mock");
/// ```
pub fn create_provider(backend: ProviderBackend) -> Result<Arc<dyn DnsProvider>> {
    log::debug!("Creating provider {}", backend.provider_type());
    match backend {
        #[cfg(feature = "mock")]
        ProviderBackend::Mock { store } => match store {
            Some(store) => Ok(Arc::new(MockProvider::new(store))),
            None => Ok(Arc::new(MockProvider::with_default_data()?)),
        },
        #[cfg(feature = "ultradns")]
        ProviderBackend::UltraDns {
            client,
            record_sets,
        } => {
            let mut builder = UltraDnsProvider::builder(client);
            if let Some(record_sets) = record_sets {
                builder = builder.record_sets(record_sets);
            }
            Ok(Arc::new(builder.build()))
        }
        #[cfg(feature = "dynect")]
        ProviderBackend::DynEct {
            client,
            record_sets,
        } => {
            let mut builder = DynEctProvider::builder(client);
            if let Some(record_sets) = record_sets {
                builder = builder.record_sets(record_sets);
            }
            Ok(Arc::new(builder.build()))
        }
    }
}

/// Returns metadata for all providers enabled via feature flags.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![
        #[cfg(feature = "mock")]
        MockProvider::metadata(),
        #[cfg(feature = "ultradns")]
        UltraDnsProvider::metadata(),
        #[cfg(feature = "dynect")]
        DynEctProvider::metadata(),
    ]
}
