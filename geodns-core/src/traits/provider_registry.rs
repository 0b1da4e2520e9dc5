//! Provider registry abstract Trait

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use geodns_provider::DnsProvider;

/// Provider Registry Trait
///
/// Manages all registered Provider instances, indexed by provider id.
/// Provides a default memory implementation of `InMemoryProviderRegistry`.
#[async_trait]
pub trait ProviderRegistry: Send + Sync {
    /// Register a Provider instance under its own [`DnsProvider::id`].
    /// Replaces any provider already registered with that id.
    async fn register(&self, provider: Arc<dyn DnsProvider>);

    /// Remove the Provider registered under `provider_id`
    async fn unregister(&self, provider_id: &str);

    /// Get Provider instance
    async fn get(&self, provider_id: &str) -> Option<Arc<dyn DnsProvider>>;

    /// List all registered provider ids, sorted
    async fn list_provider_ids(&self) -> Vec<String>;
}

/// In-memory Provider registry
#[derive(Clone)]
pub struct InMemoryProviderRegistry {
    providers: Arc<RwLock<BTreeMap<String, Arc<dyn DnsProvider>>>>,
}

impl InMemoryProviderRegistry {
    /// Create a new memory registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderRegistry for InMemoryProviderRegistry {
    async fn register(&self, provider: Arc<dyn DnsProvider>) {
        let id = provider.id().to_string();
        log::debug!("Registering provider {id}");
        self.providers.write().await.insert(id, provider);
    }

    async fn unregister(&self, provider_id: &str) {
        self.providers.write().await.remove(provider_id);
    }

    async fn get(&self, provider_id: &str) -> Option<Arc<dyn DnsProvider>> {
        self.providers.read().await.get(provider_id).cloned()
    }

    async fn list_provider_ids(&self) -> Vec<String> {
        self.providers.read().await.keys().cloned().collect()
    }
}
