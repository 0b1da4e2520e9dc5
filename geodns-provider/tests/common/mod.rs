//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::TryStreamExt;
use geodns_provider::dynect::{GeoRegionGroup, GeoService, GeoServiceClient, Node, RawRecordSet};
use geodns_provider::ultradns::{
    DirectionalPool, DirectionalPoolClient, DirectionalPoolRecord, DirectionalPoolRecordDetail,
    IdAndName,
};
use geodns_provider::{
    GeoConfig, InMemoryRecordStore, ProviderError, RecordData, RecordSet, RecordSetStream, Result,
};

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("expected Ok(..), got Err({e})"),
        }
    };
}

/// Drains a listing into a `Vec`, keeping the first failure.
pub async fn collect(listing: Result<RecordSetStream<'_>>) -> Result<Vec<RecordSet>> {
    listing?.try_collect().await
}

// ============ Record sets ============

pub fn a(name: &str, ttl: u32, addresses: &[&str]) -> RecordSet {
    RecordSet::builder()
        .name(name)
        .record_type("A")
        .ttl(ttl)
        .add_all(addresses.iter().map(|address| RecordData::A {
            address: (*address).to_string(),
        }))
        .build()
        .expect("valid A record set")
}

pub fn cname(name: &str, ttl: u32, target: &str) -> RecordSet {
    RecordSet::builder()
        .name(name)
        .record_type("CNAME")
        .ttl(ttl)
        .add(RecordData::CNAME {
            target: target.to_string(),
        })
        .build()
        .expect("valid CNAME record set")
}

pub fn with_geo(rrset: &RecordSet, group: &str, territories: &[&str]) -> RecordSet {
    let geo = GeoConfig::new(
        group,
        territories.iter().map(ToString::to_string).collect(),
    )
    .expect("valid geo config");
    rrset
        .to_builder()
        .geo(geo)
        .build()
        .expect("valid geo record set")
}

/// `example.com.`: plain `www` A plus geo CNAMEs for `geo` in groups east and west.
pub async fn example_com_store() -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    store
        .put("example.com.", a("www.example.com.", 3600, &["1.1.1.1"]))
        .await;
    store
        .put(
            "example.com.",
            with_geo(
                &cname("geo.example.com.", 300, "east.example.com."),
                "east",
                &["US-VA"],
            ),
        )
        .await;
    store
        .put(
            "example.com.",
            with_geo(
                &cname("geo.example.com.", 300, "west.example.com."),
                "west",
                &["US-CA"],
            ),
        )
        .await;
    store
}

// ============ UltraDNS 假客户端 ============

pub fn pool_record(
    name: &str,
    record_type: &str,
    ttl: u32,
    rdata: &[&str],
    group: &str,
) -> DirectionalPoolRecordDetail {
    DirectionalPoolRecordDetail {
        name: name.to_string(),
        record: DirectionalPoolRecord {
            record_type: record_type.to_string(),
            ttl: Some(ttl),
            rdata: rdata.iter().map(ToString::to_string).collect(),
            no_response: false,
        },
        geolocation_group: Some(IdAndName::new(format!("id-{group}"), group)),
        group: None,
    }
}

pub fn no_response(name: &str, record_type: &str, group: &str) -> DirectionalPoolRecordDetail {
    let mut detail = pool_record(name, record_type, 0, &[], group);
    detail.record.no_response = true;
    detail
}

/// In-memory directional pool client counting territory lookups per group id.
#[derive(Default)]
pub struct CountingPoolClient {
    pub zones: Vec<String>,
    pub pools: Vec<DirectionalPool>,
    pub records: HashMap<String, Vec<DirectionalPoolRecordDetail>>,
    pub territories: HashMap<String, Vec<String>>,
    pub fail_listing: bool,
    territory_calls: Mutex<HashMap<String, usize>>,
}

impl CountingPoolClient {
    pub fn new(zone: &str) -> Self {
        Self {
            zones: vec![zone.to_string()],
            ..Self::default()
        }
    }

    /// Adds a pool for `dname` holding `records` in the given (vendor) order.
    pub fn pool(mut self, dname: &str, records: Vec<DirectionalPoolRecordDetail>) -> Self {
        let id = format!("pool-{}", self.pools.len());
        self.pools.push(DirectionalPool {
            id: id.clone(),
            dname: dname.to_string(),
        });
        self.records.insert(id, records);
        self
    }

    pub fn group(mut self, name: &str, territories: &[&str]) -> Self {
        self.territories.insert(
            format!("id-{name}"),
            territories.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub fn territory_calls(&self, group: &str) -> usize {
        self.territory_calls
            .lock()
            .expect("territory call lock")
            .get(&format!("id-{group}"))
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DirectionalPoolClient for CountingPoolClient {
    async fn has_zone(&self, zone: &str) -> Result<bool> {
        Ok(self.zones.iter().any(|z| z == zone))
    }

    async fn list_pools(&self, _zone: &str) -> Result<Vec<DirectionalPool>> {
        if self.fail_listing {
            return Err(ProviderError::NetworkError {
                provider: "ultradns".into(),
                detail: "connection reset by peer".into(),
            });
        }
        Ok(self.pools.clone())
    }

    async fn list_pool_records(&self, pool_id: &str) -> Result<Vec<DirectionalPoolRecordDetail>> {
        Ok(self.records.get(pool_id).cloned().unwrap_or_default())
    }

    async fn group_territories(&self, group_id: &str) -> Result<Vec<String>> {
        *self
            .territory_calls
            .lock()
            .expect("territory call lock")
            .entry(group_id.to_string())
            .or_default() += 1;
        self.territories
            .get(group_id)
            .cloned()
            .ok_or_else(|| ProviderError::Unknown {
                provider: "ultradns".into(),
                raw_code: Some("4101".into()),
                raw_message: format!("group {group_id} does not exist"),
            })
    }
}

// ============ DynECT 假客户端 ============

pub fn raw_record_set(record_type: &str, ttl: u32, rdata: &[&str]) -> RawRecordSet {
    RawRecordSet {
        record_type: record_type.to_string(),
        ttl: Some(ttl),
        rdata: rdata.iter().map(ToString::to_string).collect(),
    }
}

pub fn region_group(name: &str, countries: &[&str], record_sets: Vec<RawRecordSet>) -> GeoRegionGroup {
    GeoRegionGroup {
        name: name.to_string(),
        countries: countries.iter().map(ToString::to_string).collect(),
        record_sets,
    }
}

pub fn service(name: &str, zone: &str, fqdns: &[&str], groups: Vec<GeoRegionGroup>) -> GeoService {
    GeoService {
        name: name.to_string(),
        nodes: fqdns.iter().map(|fqdn| Node::new(zone, *fqdn)).collect(),
        groups,
    }
}

/// In-memory geo service client recording which services were fetched.
pub struct FakeGeoServiceClient {
    pub zones: Vec<String>,
    pub services: BTreeMap<String, GeoService>,
    fetched: Mutex<Vec<String>>,
}

impl FakeGeoServiceClient {
    pub fn new(zone: &str, services: Vec<GeoService>) -> Self {
        Self {
            zones: vec![zone.to_string()],
            services: services
                .into_iter()
                .map(|service| (service.name.clone(), service))
                .collect(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().expect("fetched lock").clone()
    }
}

#[async_trait]
impl GeoServiceClient for FakeGeoServiceClient {
    async fn has_zone(&self, zone: &str) -> Result<bool> {
        Ok(self.zones.iter().any(|z| z == zone))
    }

    async fn list_service_ids(&self) -> Result<Vec<String>> {
        Ok(self.services.keys().cloned().collect())
    }

    async fn get_service(&self, id: &str) -> Result<GeoService> {
        self.fetched.lock().expect("fetched lock").push(id.to_string());
        self.services
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::Unknown {
                provider: "dynect".into(),
                raw_code: None,
                raw_message: format!("service {id} not found"),
            })
    }
}
