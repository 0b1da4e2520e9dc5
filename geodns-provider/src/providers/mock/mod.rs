//! In-memory mock Provider

mod fixture;
mod provider;
mod store;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::RecordSet;

pub use store::{InMemoryRecordStore, MockGeoRecordSetApi, MockRecordSetApi};

pub(crate) const PROVIDER_ID: &str = "mock";

/// In-memory Provider backed by an [`InMemoryRecordStore`]
pub struct MockProvider {
    pub(crate) store: InMemoryRecordStore,
    pub(crate) geo: bool,
}

/// Mock Provider Builder
#[derive(Default)]
pub struct MockProviderBuilder {
    zones: BTreeMap<String, Vec<RecordSet>>,
    geo: Option<bool>,
}

impl MockProviderBuilder {
    /// Adds an empty zone.
    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zones.entry(zone.into()).or_default();
        self
    }

    /// Adds a record set to `zone`, creating the zone if needed.
    pub fn record_set(mut self, zone: impl Into<String>, rrset: RecordSet) -> Self {
        self.zones.entry(zone.into()).or_default().push(rrset);
        self
    }

    /// Adds every record set to `zone`.
    pub fn record_sets(
        mut self,
        zone: impl Into<String>,
        rrsets: impl IntoIterator<Item = RecordSet>,
    ) -> Self {
        self.zones.entry(zone.into()).or_default().extend(rrsets);
        self
    }

    /// Turns geo support on or off (default on). When off, the provider reports no geo
    /// capability and its geo record sets are only reachable through the store.
    pub fn geo(mut self, enabled: bool) -> Self {
        self.geo = Some(enabled);
        self
    }

    pub fn build(self) -> MockProvider {
        MockProvider {
            store: InMemoryRecordStore::from_zones(self.zones),
            geo: self.geo.unwrap_or(true),
        }
    }
}

impl MockProvider {
    pub fn new(store: InMemoryRecordStore) -> Self {
        Self { store, geo: true }
    }

    pub fn builder() -> MockProviderBuilder {
        MockProviderBuilder::default()
    }

    /// Provider holding the `denominator.io.` demonstration zone.
    pub fn with_default_data() -> Result<Self> {
        Ok(Self::builder()
            .record_sets(fixture::ZONE, fixture::record_sets()?)
            .build())
    }

    /// The backing store, shared with every API this provider hands out.
    pub fn store(&self) -> &InMemoryRecordStore {
        &self.store
    }
}
