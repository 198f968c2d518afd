//! Language scanners
//!
//! One scanner per language family, all driven by a shared
//! [`FeatureIndex`].

pub mod markup;
pub mod script;
pub mod style;

pub use markup::MarkupScanner;
pub use script::ScriptScanner;
pub use style::StyleScanner;

use crate::config::ScanConfig;
use crate::features::scanning::index::{FeatureIndex, IndexedFeature};
use crate::features::scanning::ports::{LanguageScanner, ScannerRegistry};
use crate::features::scanning::script_table::ScriptNameTable;
use crate::shared::models::{FeatureRecord, Issue, Location};

/// Create a registry with all three scanners registered
pub fn create_registry(config: &ScanConfig) -> ScannerRegistry {
    let mut registry = ScannerRegistry::new();
    registry.register(Box::new(ScriptScanner::new()));
    registry.register(Box::new(StyleScanner::new(&config.style)));
    registry.register(Box::new(MarkupScanner::new()));
    registry
}

pub(crate) fn issue_at(
    path: &str,
    feature: &IndexedFeature,
    name: String,
    at: Location,
    index: &FeatureIndex,
) -> Issue {
    Issue {
        file: path.to_string(),
        feature_id: feature.identifier.clone(),
        name,
        status: feature.status,
        priority: index.priority_of(feature.status),
        line: at.line,
        column: at.column,
    }
}

/// Scan script source against a catalog with the built-in name table
pub fn scan_script(source: &str, path: &str, catalog: &[FeatureRecord]) -> Vec<Issue> {
    let index = FeatureIndex::build(catalog, &ScriptNameTable::default());
    ScriptScanner::new().scan(source, path, &index)
}

/// Scan a stylesheet against a catalog with default rules
pub fn scan_style(source: &str, path: &str, catalog: &[FeatureRecord]) -> Vec<Issue> {
    let index = FeatureIndex::build(catalog, &ScriptNameTable::empty());
    StyleScanner::default().scan(source, path, &index)
}

/// Scan markup against a catalog
pub fn scan_markup(source: &str, path: &str, catalog: &[FeatureRecord]) -> Vec<Issue> {
    let index = FeatureIndex::build(catalog, &ScriptNameTable::empty());
    MarkupScanner::new().scan(source, path, &index)
}
