//! UltraDNS directional pool 类型定义

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grouping::{DirectionalGroup, DirectionalRecord};
use crate::model::RecordData;
use crate::providers::common::parse_rdata;

use super::PROVIDER_ID;

/// Account-level directional group reference.
pub type IdAndName = DirectionalGroup;

/// A directional pool: the set of directional records of one owner name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalPool {
    pub id: String,
    /// Owner name served by the pool.
    pub dname: String,
}

/// Type, ttl and rdata of one directional record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalPoolRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: Option<u32>,
    /// Rdata fields in wire order, e.g. `["10", "mail.example.com."]` for MX.
    #[serde(default)]
    pub rdata: Vec<String>,
    /// Placeholder answering nothing for the group.
    #[serde(default)]
    pub no_response: bool,
}

/// A directional record as listed from a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalPoolRecordDetail {
    pub name: String,
    pub record: DirectionalPoolRecord,
    pub geolocation_group: Option<IdAndName>,
    /// Source-IP group, used when there is no geolocation group.
    pub group: Option<IdAndName>,
}

impl DirectionalRecord for DirectionalPoolRecordDetail {
    fn name(&self) -> &str {
        &self.name
    }

    fn record_type(&self) -> &str {
        &self.record.record_type
    }

    fn ttl(&self) -> Option<u32> {
        self.record.ttl
    }

    fn group(&self) -> Option<&DirectionalGroup> {
        self.geolocation_group.as_ref().or(self.group.as_ref())
    }

    fn is_no_response(&self) -> bool {
        self.record.no_response
    }

    fn rdata(&self) -> Result<RecordData> {
        parse_rdata(&self.record.record_type, self.record.rdata.as_slice(), PROVIDER_ID)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn geolocation_group_wins_over_source_ip_group() {
        let json = r#"{
            "name": "www.geo.denominator.io.",
            "record": {"type": "A", "ttl": 300, "rdata": ["1.1.1.1"]},
            "geolocationGroup": {"id": "g-geo", "name": "alazona"},
            "group": {"id": "g-ip", "name": "office"}
        }"#;
        let detail: DirectionalPoolRecordDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.group().unwrap().id, "g-geo");
        assert!(!detail.is_no_response());
        assert_eq!(
            detail.rdata().unwrap(),
            RecordData::A {
                address: "1.1.1.1".into()
            }
        );
    }

    #[test]
    fn source_ip_group_is_fallback() {
        let detail = DirectionalPoolRecordDetail {
            name: "www.geo.denominator.io.".into(),
            record: DirectionalPoolRecord {
                record_type: "A".into(),
                ttl: None,
                rdata: vec!["1.1.1.1".into()],
                no_response: false,
            },
            geolocation_group: None,
            group: Some(IdAndName::new("g-ip", "office")),
        };
        assert_eq!(detail.group().unwrap().name, "office");
    }
}
