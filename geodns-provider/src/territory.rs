//! Call-scoped territory resolution for providers whose raw records reference
//! directional groups by id.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::Result;

/// Looks up the territories of a directional group at the vendor.
#[async_trait]
pub trait TerritoryLoader: Send + Sync {
    /// Returns the territories of `group_id`. Failures are upstream fetch failures.
    async fn load(&self, group_id: &str) -> Result<Vec<String>>;
}

/// Memoizing front for a [`TerritoryLoader`].
///
/// Create one per top-level listing call and drop it when the call completes: within the
/// call each group id is loaded at most once, and the next call sees fresh vendor data.
/// Clones share the same cache.
#[derive(Clone)]
pub struct TerritoryResolver {
    loader: Arc<dyn TerritoryLoader>,
    cache: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl TerritoryResolver {
    /// Creates a resolver with an empty cache.
    pub fn new(loader: Arc<dyn TerritoryLoader>) -> Self {
        Self {
            loader,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the territories of `group_id`, loading them on first use.
    ///
    /// The cache lock is held across the load, so concurrent callers asking for the same id
    /// still trigger a single lookup. Failed loads are not cached.
    pub async fn resolve(&self, group_id: &str) -> Result<Vec<String>> {
        let mut cache = self.cache.lock().await;
        if let Some(territories) = cache.get(group_id) {
            return Ok(territories.clone());
        }

        log::debug!("Resolving territories of directional group {group_id}");
        let territories = self.loader.load(group_id).await?;
        cache.insert(group_id.to_string(), territories.clone());
        Ok(territories)
    }
}
