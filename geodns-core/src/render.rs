//! Text rendering of record sets, one line per rdata value

use geodns_provider::RecordSet;

/// Base lines of `rrset`: `name type [ttl] rdata`, one per rdata value in rdata order.
///
/// The ttl column is left out when the record set uses the zone default. A record set
/// without rdata still renders as a single line.
pub fn record_set_lines(rrset: &RecordSet) -> Vec<String> {
    let mut head = format!("{} {}", rrset.name(), rrset.record_type());
    if let Some(ttl) = rrset.ttl() {
        head.push_str(&format!(" {ttl}"));
    }
    if rrset.rdata().is_empty() {
        return vec![head];
    }
    rrset
        .rdata()
        .iter()
        .map(|rdata| format!("{head} {rdata}"))
        .collect()
}

/// Newline-joined [`record_set_lines`].
pub fn render_record_set(rrset: &RecordSet) -> String {
    record_set_lines(rrset).join("\n")
}

/// Base lines with ` {group} [t1, t2]` appended to each.
///
/// Record sets without a geo config render like [`render_record_set`].
pub fn render_geo_record_set(rrset: &RecordSet) -> String {
    let Some(geo) = rrset.geo() else {
        return render_record_set(rrset);
    };
    record_set_lines(rrset)
        .into_iter()
        .map(|line| format!("{line} {} {}", geo.group_name(), geo.territories_display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use geodns_provider::{GeoConfig, RecordData};

    use super::*;

    fn a(address: &str) -> RecordData {
        RecordData::A {
            address: address.to_string(),
        }
    }

    #[test]
    fn one_line_per_rdata() {
        let rrset = RecordSet::builder()
            .name("www1.denominator.io.")
            .record_type("A")
            .ttl(3600)
            .add_all([a("1.1.1.1"), a("1.1.1.2")])
            .build()
            .unwrap();
        assert_eq!(
            render_record_set(&rrset),
            "www1.denominator.io. A 3600 1.1.1.1\nwww1.denominator.io. A 3600 1.1.1.2"
        );
    }

    #[test]
    fn ttl_column_is_optional() {
        let rrset = RecordSet::builder()
            .name("www.denominator.io.")
            .record_type("CNAME")
            .add(RecordData::CNAME {
                target: "www1.denominator.io.".into(),
            })
            .build()
            .unwrap();
        assert_eq!(
            record_set_lines(&rrset),
            ["www.denominator.io. CNAME www1.denominator.io."]
        );
    }

    #[test]
    fn geo_suffix_on_every_line() {
        let rrset = RecordSet::builder()
            .name("www.geo.denominator.io.")
            .record_type("A")
            .ttl(300)
            .add_all([a("1.1.1.1"), a("1.1.1.2")])
            .geo(GeoConfig::new("alazona", vec!["Alaska".into(), "Arizona".into()]).unwrap())
            .build()
            .unwrap();
        assert_eq!(
            render_geo_record_set(&rrset),
            "www.geo.denominator.io. A 300 1.1.1.1 alazona [Alaska, Arizona]\n\
             www.geo.denominator.io. A 300 1.1.1.2 alazona [Alaska, Arizona]"
        );
    }

    #[test]
    fn geo_with_no_territories() {
        let rrset = RecordSet::builder()
            .name("x.example.com.")
            .record_type("A")
            .ttl(60)
            .add(a("10.0.0.1"))
            .geo(GeoConfig::new("empty", vec![]).unwrap())
            .build()
            .unwrap();
        assert_eq!(
            render_geo_record_set(&rrset),
            "x.example.com. A 60 10.0.0.1 empty []"
        );
    }

    #[test]
    fn plain_record_set_renders_without_suffix() {
        let rrset = RecordSet::builder()
            .name("x.example.com.")
            .record_type("A")
            .add(a("10.0.0.1"))
            .build()
            .unwrap();
        assert_eq!(render_geo_record_set(&rrset), "x.example.com. A 10.0.0.1");
    }
}
