//! Provider metadata service
//!
//! Static metadata of the enabled providers (stateless service)

use geodns_provider::{ProviderMetadata, ProviderType, get_all_provider_metadata};

/// Provider metadata service (stateless)
pub struct ProviderMetadataService;

impl ProviderMetadataService {
    /// Create Provider metadata service instance
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Metadata of every provider compiled into this build
    pub fn list_providers(&self) -> Vec<ProviderMetadata> {
        get_all_provider_metadata()
    }

    /// Provider types able to serve geo record sets
    pub fn geo_providers(&self) -> Vec<ProviderType> {
        self.list_providers()
            .into_iter()
            .filter(|meta| meta.features.geo)
            .map(|meta| meta.id)
            .collect()
    }
}

impl Default for ProviderMetadataService {
    fn default() -> Self {
        Self::new()
    }
}
