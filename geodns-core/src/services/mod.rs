//! 业务逻辑服务层

mod geo_record_service;
mod provider_metadata_service;

pub use geo_record_service::GeoRecordService;
pub use provider_metadata_service::ProviderMetadataService;

use std::sync::Arc;

use geodns_provider::DnsProvider;

use crate::error::{CoreError, CoreResult};
use crate::traits::ProviderRegistry;

/// 服务上下文 - 持有所有依赖
///
/// 前端层创建此上下文，并注入已注册好 Provider 的注册表。
pub struct ServiceContext {
    /// Provider 注册表
    provider_registry: Arc<dyn ProviderRegistry>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(provider_registry: Arc<dyn ProviderRegistry>) -> Self {
        Self { provider_registry }
    }

    /// Provider 注册表
    #[must_use]
    pub fn provider_registry(&self) -> &Arc<dyn ProviderRegistry> {
        &self.provider_registry
    }

    /// 获取 Provider 实例
    pub async fn get_provider(&self, provider_id: &str) -> CoreResult<Arc<dyn DnsProvider>> {
        self.provider_registry
            .get(provider_id)
            .await
            .ok_or_else(|| CoreError::ProviderNotFound(provider_id.to_string()))
    }

    /// 记录失败并原样返回：预期内的错误记 `warn`，其余记 `error`
    pub fn report(&self, err: impl Into<CoreError>) -> CoreError {
        let err = err.into();
        if err.is_expected() {
            log::warn!("Service error: {err}");
        } else {
            log::error!("Service error: {err}");
        }
        err
    }
}
