//! Demonstration data for zone `denominator.io.`

use crate::error::Result;
use crate::model::{GeoConfig, RecordData, RecordSet};

pub(crate) const ZONE: &str = "denominator.io.";

fn geo(group: &str, territories: &[&str]) -> Result<GeoConfig> {
    GeoConfig::new(group, territories.iter().map(ToString::to_string).collect())
}

fn cname(target: &str) -> RecordData {
    RecordData::CNAME {
        target: target.to_string(),
    }
}

fn a(address: &str) -> RecordData {
    RecordData::A {
        address: address.to_string(),
    }
}

/// Record sets of the demonstration zone: plain SOA, NS, A and CNAME sets, a geo A set
/// and one geo CNAME per group (`alazona`, `columbador`, `antarctica`).
pub(crate) fn record_sets() -> Result<Vec<RecordSet>> {
    Ok(vec![
        RecordSet::builder()
            .name(ZONE)
            .record_type("SOA")
            .ttl(3600)
            .add(RecordData::SOA {
                mname: format!("ns1.{ZONE}"),
                rname: format!("admin.{ZONE}"),
                serial: 1,
                refresh: 3600,
                retry: 600,
                expire: 604_800,
                minimum: 60,
            })
            .build()?,
        RecordSet::builder()
            .name(ZONE)
            .record_type("NS")
            .ttl(86400)
            .add(RecordData::NS {
                nameserver: format!("ns1.{ZONE}"),
            })
            .build()?,
        RecordSet::builder()
            .name(format!("www1.{ZONE}"))
            .record_type("A")
            .ttl(3600)
            .add_all([a("1.1.1.1"), a("1.1.1.2")])
            .build()?,
        RecordSet::builder()
            .name(format!("www2.{ZONE}"))
            .record_type("A")
            .ttl(3600)
            .add(a("2.2.2.2"))
            .build()?,
        RecordSet::builder()
            .name(format!("www.{ZONE}"))
            .record_type("CNAME")
            .ttl(3600)
            .add(cname(&format!("www1.{ZONE}")))
            .build()?,
        RecordSet::builder()
            .name("www2.geo.denominator.io.")
            .record_type("A")
            .ttl(300)
            .add(a("1.1.1.1"))
            .geo(geo("alazona", &["Alaska", "Arizona"])?)
            .build()?,
        RecordSet::builder()
            .name("www.geo.denominator.io.")
            .record_type("CNAME")
            .ttl(300)
            .add(cname("a.denominator.io."))
            .geo(geo("alazona", &["Alaska", "Arizona"])?)
            .build()?,
        RecordSet::builder()
            .name("www.geo.denominator.io.")
            .record_type("CNAME")
            .ttl(86400)
            .add(cname("b.denominator.io."))
            .geo(geo("columbador", &["Colombia", "Ecuador"])?)
            .build()?,
        RecordSet::builder()
            .name("www.geo.denominator.io.")
            .record_type("CNAME")
            .ttl(0)
            .add(cname("c.denominator.io."))
            .geo(geo(
                "antarctica",
                &["Bouvet Island", "French Southern Territories", "Antarctica"],
            )?)
            .build()?,
    ])
}
