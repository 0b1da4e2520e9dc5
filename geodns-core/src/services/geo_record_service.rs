//! Geo 记录查询服务
//!
//! Backs the `geo list`, `geo get` and `record list` commands of a front end: picks the
//! provider from the registry, runs the listing, and renders each record set as text.

use std::sync::Arc;

use futures::TryStreamExt;
use geodns_provider::{DnsProvider, GeoRecordSetApi, ReadOnlyRecordSetApi, RecordSetStream};

use crate::error::{CoreError, CoreResult};
use crate::render::render_geo_record_set;
use crate::services::ServiceContext;

/// Geo 记录查询服务
pub struct GeoRecordService {
    ctx: Arc<ServiceContext>,
}

impl GeoRecordService {
    /// 创建服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Renders the geo record sets of `zone`, one entry per record set.
    ///
    /// `name` narrows the listing to one owner name, `record_type` further to one type.
    /// A type without a name is rejected.
    pub async fn list_geo(
        &self,
        provider_id: &str,
        zone: &str,
        name: Option<&str>,
        record_type: Option<&str>,
    ) -> CoreResult<Vec<String>> {
        if name.is_none() && record_type.is_some() {
            return Err(self.ctx.report(CoreError::ValidationError(
                "type must be given together with name".to_string(),
            )));
        }
        let api = self.geo_api(provider_id, zone).await?;
        let listing = match (name, record_type) {
            (Some(name), Some(record_type)) => api.list_by_name_and_type(name, record_type),
            (Some(name), None) => api.list_by_name(name),
            _ => api.list(),
        };
        self.render_all(listing).await
    }

    /// Renders the geo record set of `group`, or an empty string when there is none.
    pub async fn get_geo(
        &self,
        provider_id: &str,
        zone: &str,
        name: &str,
        record_type: &str,
        group: &str,
    ) -> CoreResult<String> {
        let api = self.geo_api(provider_id, zone).await?;
        let found = api
            .get_by_name_type_and_group(name, record_type, group)
            .await
            .map_err(|e| self.ctx.report(e))?;
        Ok(found
            .as_ref()
            .map(render_geo_record_set)
            .unwrap_or_default())
    }

    /// Renders every record set of `zone`, plain sets first, then geo sets.
    pub async fn list_records(&self, provider_id: &str, zone: &str) -> CoreResult<Vec<String>> {
        let provider = self.provider(provider_id).await?;
        let api = provider
            .read_only_record_set_api(zone)
            .await
            .map_err(|e| self.ctx.report(e))?;
        self.render_all(api.list()).await
    }

    async fn provider(&self, provider_id: &str) -> CoreResult<Arc<dyn DnsProvider>> {
        self.ctx
            .get_provider(provider_id)
            .await
            .map_err(|e| self.ctx.report(e))
    }

    async fn geo_api(&self, provider_id: &str, zone: &str) -> CoreResult<Arc<dyn GeoRecordSetApi>> {
        let provider = self.provider(provider_id).await?;
        provider
            .geo_record_set_api(zone)
            .await
            .map_err(|e| self.ctx.report(e))?
            .ok_or_else(|| {
                self.ctx.report(CoreError::GeoNotSupported {
                    provider: provider_id.to_string(),
                    zone: zone.to_string(),
                })
            })
    }

    async fn render_all(
        &self,
        listing: geodns_provider::Result<RecordSetStream<'_>>,
    ) -> CoreResult<Vec<String>> {
        listing
            .map_err(|e| self.ctx.report(e))?
            .map_ok(|rrset| render_geo_record_set(&rrset))
            .try_collect()
            .await
            .map_err(|e| self.ctx.report(e))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::test_utils::{create_test_service, example_com_store};
    use crate::traits::ProviderRegistry;
    use geodns_provider::{MockProvider, ProviderError};

    #[tokio::test]
    async fn list_geo_renders_each_group() {
        let (svc, registry) = create_test_service();
        registry
            .register(Arc::new(MockProvider::new(example_com_store().await)))
            .await;

        let lines = svc
            .list_geo("mock", "example.com.", Some("geo.example.com."), Some("CNAME"))
            .await
            .unwrap();

        assert_eq!(
            lines,
            [
                "geo.example.com. CNAME 300 east.example.com. east [US-VA]",
                "geo.example.com. CNAME 300 west.example.com. west [US-CA]",
            ]
        );
    }

    #[tokio::test]
    async fn list_geo_by_name_only_and_whole_zone() {
        let (svc, registry) = create_test_service();
        registry
            .register(Arc::new(MockProvider::with_default_data().unwrap()))
            .await;

        let by_name = svc
            .list_geo("mock", "denominator.io.", Some("www.geo.denominator.io."), None)
            .await
            .unwrap();
        assert_eq!(by_name.len(), 3);

        let all = svc
            .list_geo("mock", "denominator.io.", None, None)
            .await
            .unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn type_without_name_is_rejected() {
        let (svc, _) = create_test_service();
        let err = svc
            .list_geo("mock", "denominator.io.", None, Some("A"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn get_geo_renders_or_is_empty() {
        let (svc, registry) = create_test_service();
        registry
            .register(Arc::new(MockProvider::new(example_com_store().await)))
            .await;

        let east = svc
            .get_geo("mock", "example.com.", "geo.example.com.", "CNAME", "east")
            .await
            .unwrap();
        assert_eq!(east, "geo.example.com. CNAME 300 east.example.com. east [US-VA]");

        let north = svc
            .get_geo("mock", "example.com.", "geo.example.com.", "CNAME", "north")
            .await
            .unwrap();
        assert!(north.is_empty());
    }

    #[tokio::test]
    async fn list_records_is_plain_then_geo() {
        let (svc, registry) = create_test_service();
        registry
            .register(Arc::new(MockProvider::new(example_com_store().await)))
            .await;

        let lines = svc.list_records("mock", "example.com.").await.unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "www.example.com. A 3600 1.1.1.1");
        assert!(lines[1].ends_with("east [US-VA]"));
    }

    #[tokio::test]
    async fn unknown_provider() {
        let (svc, _) = create_test_service();
        let err = svc.list_records("ultradns", "example.com.").await.unwrap_err();
        assert!(matches!(err, CoreError::ProviderNotFound(ref id) if id == "ultradns"));
    }

    #[tokio::test]
    async fn provider_without_geo_capability() {
        let (svc, registry) = create_test_service();
        registry
            .register(Arc::new(
                MockProvider::builder().zone("example.com.").geo(false).build(),
            ))
            .await;

        let err = svc
            .list_geo("mock", "example.com.", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::GeoNotSupported { .. }));

        // the merged listing still works through the plain side
        assert!(svc.list_records("mock", "example.com.").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let (svc, registry) = create_test_service();
        registry
            .register(Arc::new(MockProvider::new(example_com_store().await)))
            .await;

        let err = svc
            .get_geo("mock", "missing.com.", "a.missing.com.", "A", "east")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::ZoneNotFound { .. })
        ));

        let err = svc
            .get_geo("mock", "example.com.", "geo.example.com.", "CNAME", "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::InvalidParameter { .. })
        ));
    }
}
