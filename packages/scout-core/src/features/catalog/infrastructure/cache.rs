//! Catalog cache over a persistent key-value store
//!
//! Explicit replacement for a process-wide cache: one `CatalogCache` is
//! created per accessor and injected, so tests and concurrent scans each
//! see their own instance. Every storage failure is logged and read as a
//! miss; callers never observe cache errors.

use std::sync::Arc;

use scout_storage::{KeyValueStore, MemoryStore, SqliteStore, StoredEntry};

use super::http_source::catalog_url;
use crate::config::{CacheConfig, CatalogConfig};
use crate::errors::ScoutResult;
use crate::features::catalog::domain::CachedCatalog;
use crate::shared::models::FeatureRecord;

/// Cache key for the catalog a config points at
///
/// `api-cache:` followed by the first 16 hex chars of the blake3 hash of the
/// full request URL, so each server and query string gets its own entry.
pub fn cache_key_for(config: &CatalogConfig) -> String {
    let url = catalog_url(&config.base_url, &config.endpoint);
    let hash = blake3::hash(url.as_bytes());
    format!("api-cache:{}", &hash.to_hex()[..16])
}

/// Catalog cache (`new` / `get` / `put` / `invalidate`)
#[derive(Clone)]
pub struct CatalogCache {
    store: Arc<dyn KeyValueStore>,
}

impl CatalogCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Open the store `config` points at (SQLite file or memory)
    pub fn open(config: &CacheConfig) -> ScoutResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.resolved_path() {
            Some(path) => {
                tracing::debug!("Catalog cache at {}", path.display());
                Arc::new(SqliteStore::open(&path)?)
            }
            None => {
                tracing::debug!("Catalog cache kept in memory");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::new(store))
    }

    /// Like [`CatalogCache::open`], but an unusable cache file degrades to
    /// an in-memory store for this process
    pub fn open_or_memory(config: &CacheConfig) -> Self {
        Self::open(config).unwrap_or_else(|e| {
            tracing::warn!("Catalog cache unavailable, continuing without it: {}", e);
            Self::new(Arc::new(MemoryStore::new()))
        })
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Read the cached catalog for `key` (fresh or not)
    pub async fn get(&self, key: &str) -> Option<CachedCatalog> {
        let entry = match self.store.get(key).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Cache read failed ({}): {}", self.store.backend_name(), e);
                return None;
            }
        };

        match serde_json::from_value::<Vec<FeatureRecord>>(entry.data) {
            Ok(data) => Some(CachedCatalog::new(entry.timestamp_ms, data)),
            Err(e) => {
                tracing::warn!("Cached catalog under {} is unreadable: {}", key, e);
                None
            }
        }
    }

    /// Store `features` under `key` stamped with `timestamp_ms`
    ///
    /// Returns whether the write succeeded.
    pub async fn put(&self, key: &str, timestamp_ms: i64, features: &[FeatureRecord]) -> bool {
        let data = match serde_json::to_value(features) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Cache encode failed: {}", e);
                return false;
            }
        };

        match self.store.put(key, StoredEntry::new(timestamp_ms, data)).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Cache write failed ({}): {}", self.store.backend_name(), e);
                false
            }
        }
    }

    /// Drop the cached catalog for `key`
    pub async fn invalidate(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            tracing::warn!("Cache invalidate failed ({}): {}", self.store.backend_name(), e);
        }
    }
}
