//! Directional (geo) record set configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Config key under which a [`GeoConfig`] is stored on a record set.
pub const GEO_CONFIG_KEY: &str = "geo";

/// Corresponds to a directional record set configuration: the record set is only
/// visible to resolvers in one of [`territories`](Self::territories).
///
/// # Example
///
/// ```rust
/// use geodns_provider::GeoConfig;
///
/// let geo = GeoConfig::new("US-East", vec!["US-MD".to_string(), "US-VA".to_string()]).unwrap();
/// assert_eq!(geo.group_name(), "US-East");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GeoConfigFields")]
pub struct GeoConfig {
    group_name: String,
    territories: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeoConfigFields {
    group_name: String,
    #[serde(default)]
    territories: Vec<String>,
}

impl TryFrom<GeoConfigFields> for GeoConfig {
    type Error = ProviderError;

    fn try_from(fields: GeoConfigFields) -> Result<Self> {
        Self::new(fields.group_name, fields.territories)
    }
}

impl GeoConfig {
    /// Creates a geo config. The group name must not be empty.
    pub fn new(group_name: impl Into<String>, territories: Vec<String>) -> Result<Self> {
        let group_name = group_name.into();
        if group_name.is_empty() {
            return Err(ProviderError::InvalidRecordSet {
                name: None,
                detail: "geo group name must not be empty".to_string(),
            });
        }
        Ok(Self {
            group_name,
            territories,
        })
    }

    /// Name of the policy group, e.g. `US-East`.
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Territories in which the owning record set is served.
    pub fn territories(&self) -> &[String] {
        &self.territories
    }

    /// Map view of this config, keyed `groupName` and `territories`.
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert(
            "groupName".to_string(),
            serde_json::Value::String(self.group_name.clone()),
        );
        map.insert(
            "territories".to_string(),
            serde_json::Value::Array(
                self.territories
                    .iter()
                    .cloned()
                    .map(serde_json::Value::String)
                    .collect(),
            ),
        );
        map
    }

    /// Textual form of the territory list: `[a, b, c]`.
    pub fn territories_display(&self) -> String {
        format!("[{}]", self.territories.join(", "))
    }
}

impl std::fmt::Display for GeoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.group_name, self.territories_display())
    }
}
