//! Catalog accessor against persistent stores

use std::sync::Arc;

use chrono::Utc;
use scout_core::features::catalog::cache_key_for;
use scout_core::{CatalogAccessor, CatalogCache, CatalogFreshness};
use scout_storage::{KeyValueStore, SqliteStore};
use tempfile::TempDir;

use crate::common::{fast_catalog_config, sample_catalog, ScriptedSource};

fn sqlite_cache(dir: &TempDir) -> CatalogCache {
    let store: Arc<dyn KeyValueStore> =
        Arc::new(SqliteStore::open(dir.path().join("cache.db")).unwrap());
    CatalogCache::new(store)
}

#[tokio::test]
async fn fetched_catalog_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let source = Arc::new(ScriptedSource::new(0, sample_catalog()));
        let accessor = CatalogAccessor::new(source, sqlite_cache(&dir), &fast_catalog_config());
        let snapshot = accessor.fetch_catalog().await;
        assert_eq!(snapshot.freshness, CatalogFreshness::Fetched);
    }

    // New process, network down: the fresh cache answers without a fetch
    let source = Arc::new(ScriptedSource::failing_forever());
    let accessor = CatalogAccessor::new(source.clone(), sqlite_cache(&dir), &fast_catalog_config());
    let snapshot = accessor.fetch_catalog().await;

    assert_eq!(snapshot.freshness, CatalogFreshness::Fresh);
    assert_eq!(snapshot.len(), sample_catalog().len());
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn expired_cache_is_served_offline_after_retries() {
    let dir = TempDir::new().unwrap();
    let cache = sqlite_cache(&dir);
    let written = Utc::now().timestamp_millis() - 48 * 60 * 60 * 1000;
    assert!(cache.put(&cache_key_for(&fast_catalog_config()), written, &sample_catalog()).await);

    let source = Arc::new(ScriptedSource::failing_forever());
    let accessor = CatalogAccessor::new(source.clone(), cache, &fast_catalog_config());
    let snapshot = accessor.fetch_catalog().await;

    assert_eq!(source.calls(), 3);
    assert!(snapshot.is_offline());
    assert_eq!(snapshot.timestamp_ms, Some(written));
    assert_eq!(snapshot.len(), sample_catalog().len());
    assert!(snapshot.last_error.is_some());
}

#[tokio::test]
async fn expired_cache_is_refreshed_when_network_recovers() {
    let dir = TempDir::new().unwrap();
    let cache = sqlite_cache(&dir);
    let key = cache_key_for(&fast_catalog_config());
    cache.put(&key, 0, &[]).await;

    let source = Arc::new(ScriptedSource::new(1, sample_catalog()));
    let accessor = CatalogAccessor::new(source.clone(), cache.clone(), &fast_catalog_config());
    let snapshot = accessor.fetch_catalog().await;

    assert_eq!(snapshot.freshness, CatalogFreshness::Fetched);
    assert_eq!(source.calls(), 2);

    let stored = cache.get(&key).await.unwrap();
    assert_eq!(stored.data.len(), sample_catalog().len());
    assert!(stored.timestamp > 0);
}
