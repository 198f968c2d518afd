//! Report generation
//!
//! Renders scan results as JSON, Markdown or a terminal summary.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use terminal::TerminalReporter;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::features::catalog::{CatalogFreshness, CatalogSnapshot};
use crate::pipeline::{ScanResult, ScanRun};

/// Scan result plus the context it was produced in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub root: String,
    pub generated_at: DateTime<Utc>,
    pub files_scanned: usize,
    pub cancelled: bool,
    pub catalog_features: usize,
    pub catalog_freshness: CatalogFreshness,
    /// Catalog served from a stale cache after fetch failures
    pub offline: bool,
    #[serde(flatten)]
    pub result: ScanResult,
}

impl ScanReport {
    pub fn new(root: impl Into<String>, run: ScanRun, catalog: &CatalogSnapshot) -> Self {
        Self {
            root: root.into(),
            generated_at: Utc::now(),
            files_scanned: run.files_scanned,
            cancelled: run.cancelled,
            catalog_features: catalog.len(),
            catalog_freshness: catalog.freshness,
            offline: catalog.is_offline(),
            result: run.result,
        }
    }
}
