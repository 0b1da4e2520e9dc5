//! UltraDNS directional pool Provider

mod geo;
mod provider;
mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::NoPlainRecords;
use crate::territory::TerritoryLoader;
use crate::traits::RecordSetApiFactory;

pub use geo::UltraDnsGeoRecordSetApi;
pub use types::{DirectionalPool, DirectionalPoolRecord, DirectionalPoolRecordDetail, IdAndName};

pub(crate) const PROVIDER_ID: &str = "ultradns";

/// Vendor calls the UltraDNS adapter needs. Transport, session handling and retries live
/// behind this trait; every failure it returns is passed through unchanged.
#[async_trait]
pub trait DirectionalPoolClient: Send + Sync {
    /// Whether the account owns `zone`.
    async fn has_zone(&self, zone: &str) -> Result<bool>;

    /// Directional pools of `zone`.
    async fn list_pools(&self, zone: &str) -> Result<Vec<DirectionalPool>>;

    /// Records of one pool, in vendor order.
    async fn list_pool_records(&self, pool_id: &str) -> Result<Vec<DirectionalPoolRecordDetail>>;

    /// Territories of an account-level directional group.
    async fn group_territories(&self, group_id: &str) -> Result<Vec<String>>;
}

/// Resolves directional group ids through the pool client.
pub(crate) struct PoolGroupLoader(pub(crate) Arc<dyn DirectionalPoolClient>);

#[async_trait]
impl TerritoryLoader for PoolGroupLoader {
    async fn load(&self, group_id: &str) -> Result<Vec<String>> {
        self.0.group_territories(group_id).await
    }
}

/// UltraDNS Provider
pub struct UltraDnsProvider {
    pub(crate) client: Arc<dyn DirectionalPoolClient>,
    pub(crate) record_sets: Arc<dyn RecordSetApiFactory>,
}

/// UltraDNS Provider Builder
pub struct UltraDnsProviderBuilder {
    client: Arc<dyn DirectionalPoolClient>,
    record_sets: Option<Arc<dyn RecordSetApiFactory>>,
}

impl UltraDnsProviderBuilder {
    fn new(client: Arc<dyn DirectionalPoolClient>) -> Self {
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

    pub fn build(self) -> UltraDnsProvider {
        UltraDnsProvider {
            client: self.client,
            record_sets: self
                .record_sets
                .unwrap_or_else(|| Arc::new(NoPlainRecords)),
        }
    }
}

impl UltraDnsProvider {
    pub fn new(
        client: Arc<dyn DirectionalPoolClient>,
        record_sets: Arc<dyn RecordSetApiFactory>,
    ) -> Self {
        Self::builder(client).record_sets(record_sets).build()
    }

    pub fn builder(client: Arc<dyn DirectionalPoolClient>) -> UltraDnsProviderBuilder {
        UltraDnsProviderBuilder::new(client)
    }
}
