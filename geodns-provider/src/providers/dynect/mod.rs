//! DynECT geo service Provider

mod geo;
mod provider;
mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::NoPlainRecords;
use crate::traits::RecordSetApiFactory;

pub use geo::DynEctGeoRecordSetApi;
pub use types::{GeoRegionGroup, GeoService, Node, RawRecordSet};

pub(crate) const PROVIDER_ID: &str = "dynect";

/// Vendor calls the DynECT adapter needs. Failures are passed through unchanged.
#[async_trait]
pub trait GeoServiceClient: Send + Sync {
    /// Whether the account owns `zone`.
    async fn has_zone(&self, zone: &str) -> Result<bool>;

    /// Ids of every geo service of the account. Services span zones.
    async fn list_service_ids(&self) -> Result<Vec<String>>;

    /// One geo service with its nodes and groups.
    async fn get_service(&self, id: &str) -> Result<GeoService>;
}

/// DynECT Provider
pub struct DynEctProvider {
    pub(crate) client: Arc<dyn GeoServiceClient>,
    pub(crate) record_sets: Arc<dyn RecordSetApiFactory>,
}

/// DynECT Provider Builder
pub struct DynEctProviderBuilder {
    client: Arc<dyn GeoServiceClient>,
    record_sets: Option<Arc<dyn RecordSetApiFactory>>,
}

impl DynEctProviderBuilder {
    fn new(client: Arc<dyn GeoServiceClient>) -> Self {
        Self {
            client,
            record_sets: None,
        }
    }

    /// Source of the zone's plain record sets. Without one the plain side is empty.
    pub fn record_sets(mut self, factory: Arc<dyn RecordSetApiFactory>) -> Self {
        self.record_sets = Some(factory);
        self
    }

    pub fn build(self) -> DynEctProvider {
        DynEctProvider {
            client: self.client,
            record_sets: self
                .record_sets
                .unwrap_or_else(|| Arc::new(NoPlainRecords)),
        }
    }
}

impl DynEctProvider {
    pub fn new(
        client: Arc<dyn GeoServiceClient>,
        record_sets: Arc<dyn RecordSetApiFactory>,
    ) -> Self {
        Self::builder(client).record_sets(record_sets).build()
    }

    pub fn builder(client: Arc<dyn GeoServiceClient>) -> DynEctProviderBuilder {
        DynEctProviderBuilder::new(client)
    }
}
