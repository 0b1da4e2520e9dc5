//! DynECT geo service 类型定义

use serde::{Deserialize, Serialize};

/// A zone member a geo service applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub zone: String,
    pub fqdn: String,
}

impl Node {
    pub fn new(zone: impl Into<String>, fqdn: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            fqdn: fqdn.into(),
        }
    }
}

/// Type, ttl and rdata of a record set, without an owner name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecordSet {
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: Option<u32>,
    /// One presentation-format value per rdata, e.g. `"10 mail.example.com."`.
    #[serde(default)]
    pub rdata: Vec<String>,
}

/// A region group: named territories and the record sets answered to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRegionGroup {
    pub name: String,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub record_sets: Vec<RawRecordSet>,
}

/// A geo service. Every record set of every group applies to every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoService {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub groups: Vec<GeoRegionGroup>,
}
