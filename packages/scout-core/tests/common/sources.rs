//! Scripted catalog sources standing in for the network

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use scout_core::{CatalogSource, FeatureRecord, ScoutError, ScoutResult};

/// Fails the first `failures` calls, then returns `features`
pub struct ScriptedSource {
    failures: u32,
    calls: AtomicU32,
    features: Vec<FeatureRecord>,
}

impl ScriptedSource {
    pub fn failing_forever() -> Self {
        Self::new(u32::MAX, Vec::new())
    }

    pub fn new(failures: u32, features: Vec<FeatureRecord>) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
            features,
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn fetch_features(&self) -> ScoutResult<Vec<FeatureRecord>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(ScoutError::catalog("API Request Failed: 500"))
        } else {
            Ok(self.features.clone())
        }
    }
}
