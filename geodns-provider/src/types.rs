use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::RecordSet;

/// A lazy, forward-only sequence of record sets.
///
/// Nothing is fetched from the vendor until the stream is polled. An `Err` item ends the
/// listing as far as the caller is concerned: pipelines never skip past a failure.
pub type RecordSetStream<'a> = BoxStream<'a, Result<RecordSet>>;

// ============ Provider Types ============

/// Identifies which provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// In-memory reference provider. Requires feature `mock`.
    #[cfg(feature = "mock")]
    Mock,
    /// Directional-pool provider (UltraDNS). Requires feature `ultradns`.
    #[cfg(feature = "ultradns")]
    UltraDns,
    /// Geo-service provider (`DynECT`). Requires feature `dynect`.
    #[cfg(feature = "dynect")]
    DynEct,
}

impl ProviderType {
    /// Stable identifier, also used as the registry key.
    pub fn id(self) -> &'static str {
        match self {
            #[cfg(feature = "mock")]
            Self::Mock => "mock",
            #[cfg(feature = "ultradns")]
            Self::UltraDns => "ultradns",
            #[cfg(feature = "dynect")]
            Self::DynEct => "dynect",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Optional capabilities a provider may support.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFeatures {
    /// Whether the provider supports directional (geo) record sets.
    pub geo: bool,
}

/// Metadata describing a provider type.
///
/// Obtained without an instance via [`DnsProvider::metadata()`](crate::DnsProvider::metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Optional capabilities.
    pub features: ProviderFeatures,
}
