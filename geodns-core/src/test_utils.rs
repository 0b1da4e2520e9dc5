//! 测试辅助模块
//!
//! 提供测试数据和便捷的测试工厂方法。

use std::sync::Arc;

use geodns_provider::{GeoConfig, InMemoryRecordStore, RecordData, RecordSet};

use crate::services::{GeoRecordService, ServiceContext};
use crate::traits::InMemoryProviderRegistry;

// ===== 测试数据 =====

fn cname(name: &str, target: &str, group: &str, territory: &str) -> RecordSet {
    RecordSet::builder()
        .name(name)
        .record_type("CNAME")
        .ttl(300)
        .add(RecordData::CNAME {
            target: target.to_string(),
        })
        .geo(GeoConfig::new(group, vec![territory.to_string()]).unwrap())
        .build()
        .unwrap()
}

/// `example.com.`：普通 `www` A 记录，外加 `geo` 在 east/west 两个组下的 CNAME
pub async fn example_com_store() -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    store
        .put(
            "example.com.",
            RecordSet::builder()
                .name("www.example.com.")
                .record_type("A")
                .ttl(3600)
                .add(RecordData::A {
                    address: "1.1.1.1".to_string(),
                })
                .build()
                .unwrap(),
        )
        .await;
    store
        .put(
            "example.com.",
            cname("geo.example.com.", "east.example.com.", "east", "US-VA"),
        )
        .await;
    store
        .put(
            "example.com.",
            cname("geo.example.com.", "west.example.com.", "west", "US-CA"),
        )
        .await;
    store
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<InMemoryProviderRegistry>) {
    let provider_registry = Arc::new(InMemoryProviderRegistry::new());
    let ctx = Arc::new(ServiceContext::new(provider_registry.clone()));
    (ctx, provider_registry)
}

/// 创建测试用 `GeoRecordService`
pub fn create_test_service() -> (GeoRecordService, Arc<InMemoryProviderRegistry>) {
    let (ctx, provider_registry) = create_test_context();
    (GeoRecordService::new(ctx), provider_registry)
}
