//! Portable record set model shared by every provider.

mod geo;
mod rdata;
mod record_set;

pub use geo::{GEO_CONFIG_KEY, GeoConfig};
pub use rdata::RecordData;
pub use record_set::{ConfigValue, MAX_NAME_LENGTH, MAX_TTL, RecordSet, RecordSetBuilder};

/// Returns a predicate matching record sets whose geo group is `group_name`.
///
/// Record sets without a geo config never match.
pub fn group_name_equal_to(group_name: &str) -> impl Fn(&RecordSet) -> bool + '_ {
    move |rrset| rrset.geo().is_some_and(|geo| geo.group_name() == group_name)
}

/// Returns a predicate matching record sets by owner name and type.
pub fn name_and_type_equal_to<'a>(
    name: &'a str,
    record_type: &'a str,
) -> impl Fn(&RecordSet) -> bool + 'a {
    move |rrset| rrset.name() == name && rrset.record_type() == record_type
}
