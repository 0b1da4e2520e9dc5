//! Mock DnsProvider trait 实现

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DnsProvider, GeoRecordSetApi, RecordSetApi, RecordSetApiFactory};
use crate::types::{ProviderFeatures, ProviderMetadata, ProviderType};

use super::{MockProvider, PROVIDER_ID};

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Mock,
            name: "Mock".to_string(),
            description: "In-memory provider for tests and demonstrations".to_string(),
            features: ProviderFeatures { geo: true },
        }
    }

    async fn record_set_api(&self, zone: &str) -> Result<Arc<dyn RecordSetApi>> {
        self.store.create(zone).await
    }

    async fn geo_record_set_api(&self, zone: &str) -> Result<Option<Arc<dyn GeoRecordSetApi>>> {
        let api: Arc<dyn GeoRecordSetApi> = self.store.geo_record_set_api(zone).await?;
        if !self.geo {
            return Ok(None);
        }
        Ok(Some(api))
    }
}
