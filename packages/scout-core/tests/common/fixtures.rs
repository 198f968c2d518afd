//! Test fixture generators

use scout_core::config::CatalogConfig;
use scout_core::{FeatureRecord, SourceFile};

/// Catalog covering every scanner family
pub fn sample_catalog() -> Vec<FeatureRecord> {
    vec![
        FeatureRecord::new("api-structuredClone", "structuredClone", Some("limited")),
        FeatureRecord::new("api-fetch", "Fetch", Some("wide")),
        FeatureRecord::new("api-resize-observer", "ResizeObserver", Some("newly")),
        FeatureRecord::new("css-properties-container-type", "Container queries", Some("newly")),
        FeatureRecord::new("css-properties-text-wrap", "text-wrap", Some("limited")),
        FeatureRecord::new("css-properties-text-wrap-balance", "text-wrap: balance", Some("newly")),
        FeatureRecord::new("css-properties-gap", "gap", Some("wide")),
        FeatureRecord::new("html-attribute-popover", "Popover", Some("limited")),
        FeatureRecord::new("html-element-dialog", "<dialog>", Some("wide")),
        FeatureRecord::new("html-element-search", "<search>", Some("limited")),
    ]
}

/// Catalog config without backoff delays
pub fn fast_catalog_config() -> CatalogConfig {
    CatalogConfig {
        backoff_base_ms: 0,
        ..CatalogConfig::default()
    }
}

/// A small multi-language project
pub fn sample_project() -> Vec<SourceFile> {
    vec![
        SourceFile::new(
            "src/app.ts",
            "const copy = structuredClone(state);\nconst ro = new ResizeObserver(() => {});\n",
        ),
        SourceFile::new("src/api.js", "export const load = () => fetch('/api');\n"),
        SourceFile::new(
            "styles/site.css",
            ".card {\n  container-type: inline-size;\n  gap: 1rem;\n}\nh1 { text-wrap: balance; }\n",
        ),
        SourceFile::new(
            "index.html",
            "<!doctype html>\n<html>\n<body>\n  <search popover></search>\n  <dialog open>x</dialog>\n</body>\n</html>\n",
        ),
        SourceFile::new("README.md", "structuredClone everywhere"),
    ]
}
