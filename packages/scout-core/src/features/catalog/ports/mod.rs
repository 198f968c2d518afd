//! Catalog source port

use async_trait::async_trait;

use crate::errors::ScoutResult;
use crate::shared::models::FeatureRecord;

/// Remote origin of the feature catalog
///
/// One call is one attempt; retry and backoff belong to the accessor.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full feature list
    async fn fetch_features(&self) -> ScoutResult<Vec<FeatureRecord>>;
}
