//! DynECT DnsProvider trait 实现

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, GeoRecordSetApi, RecordSetApi, require};
use crate::types::{ProviderFeatures, ProviderMetadata, ProviderType};

use super::{DynEctGeoRecordSetApi, DynEctProvider, PROVIDER_ID};

#[async_trait]
impl DnsProvider for DynEctProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::DynEct,
            name: "DynECT".to_string(),
            description: "Geo services exploded into per-node geo record sets".to_string(),
            features: ProviderFeatures { geo: true },
        }
    }

    async fn record_set_api(&self, zone: &str) -> Result<Arc<dyn RecordSetApi>> {
        require(PROVIDER_ID, "zone", zone)?;
        self.record_sets.create(zone).await
    }

    async fn geo_record_set_api(&self, zone: &str) -> Result<Option<Arc<dyn GeoRecordSetApi>>> {
        require(PROVIDER_ID, "zone", zone)?;
        if !self.client.has_zone(zone).await? {
            return Err(ProviderError::ZoneNotFound {
                provider: PROVIDER_ID.to_string(),
                zone: zone.to_string(),
            });
        }
        let api: Arc<dyn GeoRecordSetApi> =
            Arc::new(DynEctGeoRecordSetApi::new(self.client.clone(), zone));
        Ok(Some(api))
    }
}
