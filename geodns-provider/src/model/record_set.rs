use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProviderError, Result};

use super::geo::{GEO_CONFIG_KEY, GeoConfig};
use super::rdata::RecordData;

/// Owner names longer than this are rejected.
pub const MAX_NAME_LENGTH: usize = 255;
/// Largest TTL accepted, per RFC 2181.
pub const MAX_TTL: u32 = 0x7FFF_FFFF;

/// A configuration value attached to a record set under a string key.
///
/// The key decides the shape: [`GEO_CONFIG_KEY`] holds a [`Geo`](Self::Geo), every other
/// key holds an [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Directional routing, stored under [`GEO_CONFIG_KEY`].
    Geo(GeoConfig),
    /// Any other vendor configuration, kept opaque.
    Other(BTreeMap<String, String>),
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geo(geo) => write!(f, "{geo}"),
            Self::Other(values) => {
                let joined: Vec<String> = values.iter().map(|(k, v)| format!("{k}={v}")).collect();
                write!(f, "{{{}}}", joined.join(", "))
            }
        }
    }
}

/// A grouping of resource records by name and type.
///
/// Instances are immutable and only come out of [`RecordSetBuilder::build`]. Equality and
/// hashing use name, type, rdata and config; the TTL is a cache hint and is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RecordSetBuilder")]
pub struct RecordSet {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    rdata: Vec<RecordData>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    config: BTreeMap<String, ConfigValue>,
}

impl RecordSet {
    /// Returns an empty builder.
    pub fn builder() -> RecordSetBuilder {
        RecordSetBuilder::default()
    }

    /// Owner name, i.e. the node this record set pertains to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mnemonic type, e.g. `CNAME`.
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// Cache interval in seconds. `None` means the zone default.
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    /// Rdata values in insertion order.
    pub fn rdata(&self) -> &[RecordData] {
        &self.rdata
    }

    /// Server-side configuration. Empty means visible to all resolvers.
    pub fn config(&self) -> &BTreeMap<String, ConfigValue> {
        &self.config
    }

    /// The geo config, if this is a directional record set.
    pub fn geo(&self) -> Option<&GeoConfig> {
        match self.config.get(GEO_CONFIG_KEY) {
            Some(ConfigValue::Geo(geo)) => Some(geo),
            _ => None,
        }
    }

    /// Whether this record set carries a geo config.
    pub fn has_geo(&self) -> bool {
        self.geo().is_some()
    }

    /// Consumes the record set, yielding its rdata as a plain sequence.
    pub fn into_rdata(self) -> Vec<RecordData> {
        self.rdata
    }

    /// Returns a builder seeded with every field of this record set.
    pub fn to_builder(&self) -> RecordSetBuilder {
        RecordSetBuilder {
            name: Some(self.name.clone()),
            record_type: Some(self.record_type.clone()),
            ttl: self.ttl,
            rdata: self.rdata.clone(),
            config: self.config.clone(),
        }
    }
}

impl PartialEq for RecordSet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.record_type == other.record_type
            && self.rdata == other.rdata
            && self.config == other.config
    }
}

impl Eq for RecordSet {}

impl Hash for RecordSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.record_type.hash(state);
        self.rdata.hash(state);
        self.config.hash(state);
    }
}

/// Canonical textual form, also used as the deterministic sort key of listings.
impl std::fmt::Display for RecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecordSet{{name={}, type={}", self.name, self.record_type)?;
        if let Some(ttl) = self.ttl {
            write!(f, ", ttl={ttl}")?;
        }
        if !self.rdata.is_empty() {
            let values: Vec<String> = self.rdata.iter().map(ToString::to_string).collect();
            write!(f, ", rdata=[{}]", values.join(", "))?;
        }
        if !self.config.is_empty() {
            let entries: Vec<String> = self
                .config
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, ", config={{{}}}", entries.join(", "))?;
        }
        write!(f, "}}")
    }
}

/// Accumulates rdata and config, then freezes into a [`RecordSet`].
///
/// ```rust
/// use geodns_provider::{GeoConfig, RecordData, RecordSet};
///
/// let rrset = RecordSet::builder()
///     .name("www.geo.denominator.io.")
///     .record_type("CNAME")
///     .ttl(300)
///     .add(RecordData::CNAME { target: "a.denominator.io.".into() })
///     .geo(GeoConfig::new("alazona", vec!["Alaska".into(), "Arizona".into()]).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(rrset.geo().unwrap().group_name(), "alazona");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordSetBuilder {
    name: Option<String>,
    #[serde(rename = "type")]
    record_type: Option<String>,
    ttl: Option<u32>,
    #[serde(default)]
    rdata: Vec<RecordData>,
    #[serde(default, deserialize_with = "deserialize_config")]
    config: BTreeMap<String, ConfigValue>,
}

/// Reads each config entry in the shape its key calls for.
fn deserialize_config<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, ConfigValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| {
            let value = if key == GEO_CONFIG_KEY {
                serde_json::from_value(value).map(ConfigValue::Geo)
            } else {
                serde_json::from_value(value).map(ConfigValue::Other)
            };
            value
                .map(|value| (key, value))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

impl RecordSetBuilder {
    /// Sets the owner name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the mnemonic type.
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Sets the TTL in seconds.
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Sets or clears the TTL. `None` means the zone default.
    pub fn ttl_opt(mut self, ttl: Option<u32>) -> Self {
        self.ttl = ttl;
        self
    }

    /// Appends one rdata value.
    pub fn add(mut self, rdata: RecordData) -> Self {
        self.rdata.push(rdata);
        self
    }

    /// Appends every rdata value, keeping order.
    pub fn add_all(mut self, rdata: impl IntoIterator<Item = RecordData>) -> Self {
        self.rdata.extend(rdata);
        self
    }

    /// In-place variant of [`add`](Self::add), for folding loops.
    pub fn push(&mut self, rdata: RecordData) {
        self.rdata.push(rdata);
    }

    /// Adds one config entry, replacing any previous value for the key.
    pub fn put_config(mut self, key: impl Into<String>, value: ConfigValue) -> Self {
        self.config.insert(key.into(), value);
        self
    }

    /// Adds every config entry.
    pub fn put_all_config(mut self, config: BTreeMap<String, ConfigValue>) -> Self {
        self.config.extend(config);
        self
    }

    /// Replaces the whole config.
    pub fn config(mut self, config: BTreeMap<String, ConfigValue>) -> Self {
        self.config = config;
        self
    }

    /// Stores `geo` under the `geo` config key.
    pub fn geo(self, geo: GeoConfig) -> Self {
        self.put_config(GEO_CONFIG_KEY, ConfigValue::Geo(geo))
    }

    /// Validates and freezes the accumulated state.
    pub fn build(self) -> Result<RecordSet> {
        let Some(name) = self.name.filter(|n| !n.is_empty()) else {
            return Err(invalid(None, "name is required"));
        };
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(invalid(
                Some(&name),
                &format!("name must be limited to {MAX_NAME_LENGTH} characters"),
            ));
        }
        let Some(record_type) = self.record_type.filter(|t| !t.is_empty()) else {
            return Err(invalid(Some(&name), "type is required"));
        };
        if let Some(ttl) = self.ttl
            && ttl > MAX_TTL
        {
            return Err(invalid(
                Some(&name),
                &format!("invalid ttl value: {ttl}, must be 0-{MAX_TTL}"),
            ));
        }
        if let Some(other) = self
            .rdata
            .iter()
            .find(|d| !d.record_type().eq_ignore_ascii_case(&record_type))
        {
            return Err(invalid(
                Some(&name),
                &format!(
                    "{} rdata does not belong in a {record_type} record set",
                    other.record_type()
                ),
            ));
        }

        if let Some(key) = self.config.iter().find_map(|(key, value)| {
            let is_geo = matches!(value, ConfigValue::Geo(_));
            (is_geo != (key == GEO_CONFIG_KEY)).then_some(key)
        }) {
            return Err(invalid(
                Some(&name),
                &format!("config key {key} does not match its value"),
            ));
        }

        Ok(RecordSet {
            name,
            record_type,
            ttl: self.ttl,
            rdata: self.rdata,
            config: self.config,
        })
    }
}

impl TryFrom<RecordSetBuilder> for RecordSet {
    type Error = ProviderError;

    fn try_from(builder: RecordSetBuilder) -> Result<Self> {
        builder.build()
    }
}

fn invalid(name: Option<&str>, detail: &str) -> ProviderError {
    ProviderError::InvalidRecordSet {
        name: name.map(str::to_string),
        detail: detail.to_string(),
    }
}
