//! Catalog Accessor: cache-first fetch with retry and offline fallback
//!
//! Flow of [`CatalogAccessor::fetch_catalog`]:
//! 1. Cache entry younger than the TTL → return it, no network call.
//! 2. Otherwise try the source up to `max_attempts` times, sleeping
//!    `backoff_base * 2^attempt` between attempts.
//! 3. Success → persist with the current timestamp and return.
//! 4. Exhausted → stale cache (flagged offline) or an empty catalog.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::config::CatalogConfig;
use crate::errors::ScoutResult;
use crate::features::catalog::domain::{CachedCatalog, CatalogFreshness, CatalogSnapshot};
use crate::features::catalog::infrastructure::{cache_key_for, CatalogCache};
use crate::features::catalog::ports::CatalogSource;
use crate::shared::models::FeatureRecord;

/// Feature catalog accessor
pub struct CatalogAccessor {
    /// `None` runs without network access (cache only)
    source: Option<Arc<dyn CatalogSource>>,
    cache: CatalogCache,
    cache_key: String,
    ttl_ms: i64,
    max_attempts: u32,
    backoff_base: Duration,
}

impl CatalogAccessor {
    pub fn new(source: Arc<dyn CatalogSource>, cache: CatalogCache, config: &CatalogConfig) -> Self {
        Self {
            source: Some(source),
            cache,
            cache_key: cache_key_for(config),
            ttl_ms: config.cache_ttl_secs as i64 * 1000,
            max_attempts: config.max_attempts.max(1),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
        }
    }

    /// Accessor that never touches the network
    pub fn offline(cache: CatalogCache, config: &CatalogConfig) -> Self {
        Self {
            source: None,
            cache,
            cache_key: cache_key_for(config),
            ttl_ms: config.cache_ttl_secs as i64 * 1000,
            max_attempts: config.max_attempts.max(1),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    /// Delay slept after failed attempt `attempt` (0-based)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(1u32 << attempt.min(16))
    }

    /// Get the catalog, preferring a fresh cache entry
    pub async fn fetch_catalog(&self) -> CatalogSnapshot {
        let cached = self.cache.get(&self.cache_key).await;
        let now = Utc::now().timestamp_millis();

        if let Some(entry) = &cached {
            if entry.is_fresh(now, self.ttl_ms) {
                tracing::debug!("Catalog cache hit ({} features)", entry.data.len());
                return CatalogSnapshot::new(
                    entry.data.clone(),
                    CatalogFreshness::Fresh,
                    Some(entry.timestamp),
                );
            }
        }

        self.fetch_or_fallback(cached).await
    }

    /// Skip the freshness check and go to the network
    pub async fn refresh(&self) -> CatalogSnapshot {
        let cached = self.cache.get(&self.cache_key).await;
        self.fetch_or_fallback(cached).await
    }

    /// Drop the persisted catalog
    pub async fn invalidate(&self) {
        self.cache.invalidate(&self.cache_key).await;
    }

    async fn fetch_or_fallback(&self, cached: Option<CachedCatalog>) -> CatalogSnapshot {
        let Some(source) = &self.source else {
            return Self::fallback(cached, None);
        };

        match self.fetch_with_retry(source.as_ref()).await {
            Ok(features) => {
                let now = Utc::now().timestamp_millis();
                self.cache.put(&self.cache_key, now, &features).await;
                tracing::info!("Fetched catalog ({} features)", features.len());
                CatalogSnapshot::new(features, CatalogFreshness::Fetched, Some(now))
            }
            Err(e) => {
                tracing::error!("API fetch failed after multiple retries: {}", e);
                // Another scan may have refreshed the cache meanwhile
                let latest = self.cache.get(&self.cache_key).await.or(cached);
                Self::fallback(latest, Some(e.to_string()))
            }
        }
    }

    async fn fetch_with_retry(&self, source: &dyn CatalogSource) -> ScoutResult<Vec<FeatureRecord>> {
        let mut attempt = 0;
        loop {
            match source.fetch_features().await {
                Ok(features) => return Ok(features),
                Err(e) if attempt + 1 < self.max_attempts => {
                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        "Catalog fetch attempt {}/{} failed: {} (retrying in {:?})",
                        attempt + 1,
                        self.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn fallback(cached: Option<CachedCatalog>, error: Option<String>) -> CatalogSnapshot {
        match cached {
            Some(entry) => {
                tracing::warn!("Serving stale catalog ({} features)", entry.data.len());
                CatalogSnapshot::new(entry.data, CatalogFreshness::Stale, Some(entry.timestamp))
                    .with_error(error)
            }
            None => CatalogSnapshot::unavailable(error),
        }
    }
}
