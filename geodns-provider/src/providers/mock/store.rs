//! Zone-keyed in-memory record store and its read APIs

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::model::{RecordSet, group_name_equal_to};
use crate::traits::{
    GeoRecordSetApi, ReadOnlyRecordSetApi, RecordSetApi, RecordSetApiFactory, require,
};
use crate::types::RecordSetStream;

use super::PROVIDER_ID;

/// Thread-safe multi-map from zone name to record sets.
///
/// Writers are serialized against readers by an `RwLock`; listings read a snapshot and
/// emit it ordered by each record set's canonical text, so repeated listings of unchanged
/// data are identical whatever the insertion order. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    zones: Arc<RwLock<BTreeMap<String, Vec<RecordSet>>>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `zones`.
    pub fn from_zones(zones: BTreeMap<String, Vec<RecordSet>>) -> Self {
        Self {
            zones: Arc::new(RwLock::new(zones)),
        }
    }

    /// Adds an empty zone. No-op if it exists.
    pub async fn add_zone(&self, zone: &str) {
        self.zones
            .write()
            .await
            .entry(zone.to_string())
            .or_default();
    }

    /// Adds `rrset` to `zone`, creating the zone if needed.
    pub async fn put(&self, zone: &str, rrset: RecordSet) {
        self.zones
            .write()
            .await
            .entry(zone.to_string())
            .or_default()
            .push(rrset);
    }

    /// Whether `zone` exists.
    pub async fn has_zone(&self, zone: &str) -> bool {
        self.zones.read().await.contains_key(zone)
    }

    /// Zone names in order.
    pub async fn zones(&self) -> Vec<String> {
        self.zones.read().await.keys().cloned().collect()
    }

    async fn check_zone(&self, zone: &str) -> Result<()> {
        require(PROVIDER_ID, "zone", zone)?;
        if self.has_zone(zone).await {
            Ok(())
        } else {
            Err(ProviderError::ZoneNotFound {
                provider: PROVIDER_ID.to_string(),
                zone: zone.to_string(),
            })
        }
    }

    /// Geo-only view of `zone`.
    pub async fn geo_record_set_api(&self, zone: &str) -> Result<Arc<MockGeoRecordSetApi>> {
        self.check_zone(zone).await?;
        Ok(Arc::new(MockGeoRecordSetApi(self.zone_records(zone, true))))
    }

    fn zone_records(&self, zone: &str, geo: bool) -> ZoneRecords {
        ZoneRecords {
            zone: zone.to_string(),
            geo,
            store: self.clone(),
        }
    }
}

/// Plain-only view of a zone.
#[async_trait]
impl RecordSetApiFactory for InMemoryRecordStore {
    async fn create(&self, zone: &str) -> Result<Arc<dyn RecordSetApi>> {
        self.check_zone(zone).await?;
        Ok(Arc::new(MockRecordSetApi(self.zone_records(zone, false))))
    }
}

/// One side (plain or geo) of one zone.
struct ZoneRecords {
    zone: String,
    geo: bool,
    store: InMemoryRecordStore,
}

impl ZoneRecords {
    fn listing<F>(&self, keep: F) -> RecordSetStream<'static>
    where
        F: Fn(&RecordSet) -> bool + Send + 'static,
    {
        let store = self.store.clone();
        let zone = self.zone.clone();
        let geo = self.geo;
        stream::once(async move {
            let mut matched: Vec<RecordSet> = {
                let zones = store.zones.read().await;
                zones
                    .get(&zone)
                    .into_iter()
                    .flatten()
                    .filter(|rrset| rrset.has_geo() == geo && keep(rrset))
                    .cloned()
                    .collect()
            };
            matched.sort_by_cached_key(ToString::to_string);
            stream::iter(matched.into_iter().map(Ok))
        })
        .flatten()
        .boxed()
    }

    fn list(&self) -> RecordSetStream<'static> {
        self.listing(|_| true)
    }

    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'static>> {
        require(PROVIDER_ID, "name", name)?;
        let name = name.to_string();
        Ok(self.listing(move |rrset| rrset.name() == name))
    }

    fn list_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSetStream<'static>> {
        require(PROVIDER_ID, "name", name)?;
        require(PROVIDER_ID, "type", record_type)?;
        let name = name.to_string();
        let record_type = record_type.to_string();
        Ok(self.listing(move |rrset| {
            rrset.name() == name && rrset.record_type() == record_type
        }))
    }
}

/// Record sets of a zone that carry no geo config.
pub struct MockRecordSetApi(ZoneRecords);

impl ReadOnlyRecordSetApi for MockRecordSetApi {
    fn list(&self) -> Result<RecordSetStream<'_>> {
        Ok(self.0.list())
    }

    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'_>> {
        self.0.list_by_name(name)
    }

    fn list_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSetStream<'_>> {
        self.0.list_by_name_and_type(name, record_type)
    }
}

#[async_trait]
impl RecordSetApi for MockRecordSetApi {
    async fn get_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<Option<RecordSet>> {
        let mut matches = self.0.list_by_name_and_type(name, record_type)?;
        matches.next().await.transpose()
    }
}

/// Record sets of a zone that carry a geo config.
pub struct MockGeoRecordSetApi(ZoneRecords);

impl ReadOnlyRecordSetApi for MockGeoRecordSetApi {
    fn list(&self) -> Result<RecordSetStream<'_>> {
        Ok(self.0.list())
    }

    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'_>> {
        self.0.list_by_name(name)
    }

    fn list_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSetStream<'_>> {
        self.0.list_by_name_and_type(name, record_type)
    }
}

#[async_trait]
impl GeoRecordSetApi for MockGeoRecordSetApi {
    async fn get_by_name_type_and_group(
        &self,
        name: &str,
        record_type: &str,
        group: &str,
    ) -> Result<Option<RecordSet>> {
        require(PROVIDER_ID, "group", group)?;
        let group = group.to_string();
        let mut matches = self
            .0
            .list_by_name_and_type(name, record_type)?
            .filter(move |rrset| {
                let keep = match rrset {
                    Ok(rrset) => group_name_equal_to(&group)(rrset),
                    Err(_) => true,
                };
                futures::future::ready(keep)
            });
        matches.next().await.transpose()
    }
}
