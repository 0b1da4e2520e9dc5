use std::sync::Arc;

use async_trait::async_trait;

use crate::concat::ConcatRecordSets;
use crate::error::{ProviderError, Result};
use crate::model::RecordSet;
use crate::types::{ProviderMetadata, RecordSetStream};

/// Read access to the record sets of one zone.
///
/// Listing methods validate their arguments synchronously and then return a lazy stream;
/// vendor calls happen only while the stream is polled.
pub trait ReadOnlyRecordSetApi: Send + Sync {
    /// Lists every record set in the zone.
    fn list(&self) -> Result<RecordSetStream<'_>>;

    /// Lists record sets whose owner name equals `name`.
    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'_>>;

    /// Lists record sets whose owner name and type equal `name` and `record_type`.
    fn list_by_name_and_type(&self, name: &str, record_type: &str)
    -> Result<RecordSetStream<'_>>;
}

/// Plain (non-geo) record sets of one zone.
#[async_trait]
pub trait RecordSetApi: ReadOnlyRecordSetApi {
    /// Returns the record set with this name and type, if present.
    async fn get_by_name_and_type(&self, name: &str, record_type: &str)
    -> Result<Option<RecordSet>>;
}

/// Directional (geo) record sets of one zone.
///
/// Every listed record set carries a geo config.
#[async_trait]
pub trait GeoRecordSetApi: ReadOnlyRecordSetApi {
    /// Returns the record set with this name, type and geo group, if present.
    ///
    /// No match is `Ok(None)`, not an error.
    async fn get_by_name_type_and_group(
        &self,
        name: &str,
        record_type: &str,
        group: &str,
    ) -> Result<Option<RecordSet>>;
}

/// Creates the plain record set API of a zone.
///
/// Vendor providers take one of these for their non-geo side.
#[async_trait]
pub trait RecordSetApiFactory: Send + Sync {
    /// Fails with [`ProviderError::ZoneNotFound`] when the zone does not exist.
    async fn create(&self, zone: &str) -> Result<Arc<dyn RecordSetApi>>;
}

/// DNS 提供商 Trait
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Provider 元数据（类型级别）
    ///
    /// 此方法不需要实例，可以在创建 Provider 之前调用。
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Plain record sets of `zone`.
    async fn record_set_api(&self, zone: &str) -> Result<Arc<dyn RecordSetApi>>;

    /// Geo record sets of `zone`.
    ///
    /// `Ok(None)` means the provider has no geo routing at all. An unknown zone fails with
    /// [`ProviderError::ZoneNotFound`].
    async fn geo_record_set_api(&self, zone: &str) -> Result<Option<Arc<dyn GeoRecordSetApi>>>;

    /// Every record set of `zone`: plain ones first, then geo ones when supported.
    async fn read_only_record_set_api(&self, zone: &str) -> Result<Arc<dyn ReadOnlyRecordSetApi>> {
        let plain = self.record_set_api(zone).await?;
        let api: Arc<dyn ReadOnlyRecordSetApi> = match self.geo_record_set_api(zone).await? {
            Some(geo) => Arc::new(ConcatRecordSets::new(plain, geo)),
            None => plain,
        };
        Ok(api)
    }
}

/// Precondition check for required string arguments.
pub(crate) fn require(provider: &str, param: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ProviderError::missing(provider, param));
    }
    Ok(())
}
