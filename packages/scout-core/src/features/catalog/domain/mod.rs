//! Catalog domain types

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::shared::models::FeatureRecord;

/// Extract feature records from a catalog response body
///
/// A missing or non-array `features` field yields an empty list. Wrongly
/// typed fields inside an element are coerced to defaults; only elements
/// that are not objects or carry no identifier are skipped.
pub fn parse_features_response(body: &serde_json::Value) -> Vec<FeatureRecord> {
    let Some(items) = body.get("features").and_then(|f| f.as_array()) else {
        tracing::warn!("Catalog response has no features array, treating as empty");
        return Vec::new();
    };

    let mut features = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<FeatureRecord>(item.clone()) {
            Ok(record) if record.identifier.is_empty() => {
                tracing::debug!("Skipping feature #{} without identifier", i)
            }
            Ok(record) => features.push(record),
            Err(e) => tracing::debug!("Skipping malformed feature #{}: {}", i, e),
        }
    }
    features
}

/// Cached catalog as persisted by [`super::CatalogCache`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedCatalog {
    /// Write time (epoch milliseconds)
    pub timestamp: i64,
    pub data: Vec<FeatureRecord>,
}

impl CachedCatalog {
    pub fn new(timestamp: i64, data: Vec<FeatureRecord>) -> Self {
        Self { timestamp, data }
    }

    /// Fresh while younger than `ttl_ms`
    pub fn is_fresh(&self, now_ms: i64, ttl_ms: i64) -> bool {
        now_ms - self.timestamp < ttl_ms
    }
}

/// Where a catalog snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFreshness {
    /// Cache hit within the TTL, no network call made
    Fresh,
    /// Fetched from the network during this call
    Fetched,
    /// Network failed, an expired cache entry was used (offline)
    Stale,
    /// Network failed and nothing was cached, catalog is empty
    Unavailable,
}

/// Immutable catalog snapshot handed to scanners
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub features: Arc<Vec<FeatureRecord>>,
    pub freshness: CatalogFreshness,
    /// Write time of the data (epoch ms), absent when unavailable
    pub timestamp_ms: Option<i64>,
    /// Last fetch error when the network path failed
    pub last_error: Option<String>,
}

impl CatalogSnapshot {
    pub fn new(
        features: Vec<FeatureRecord>,
        freshness: CatalogFreshness,
        timestamp_ms: Option<i64>,
    ) -> Self {
        Self {
            features: Arc::new(features),
            freshness,
            timestamp_ms,
            last_error: None,
        }
    }

    /// Empty snapshot used when no data could be obtained
    pub fn unavailable(last_error: Option<String>) -> Self {
        Self {
            last_error,
            ..Self::new(Vec::new(), CatalogFreshness::Unavailable, None)
        }
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.last_error = error;
        self
    }

    /// True when the data is an expired cache copy served because the
    /// network was unreachable
    pub fn is_offline(&self) -> bool {
        self.freshness == CatalogFreshness::Stale
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
