//! End-to-end acceptance scenarios

use std::sync::Arc;

use pretty_assertions::assert_eq;
use scout_core::config::ScanConfig;
use scout_core::{
    scan_markup, scan_script, scan_style, CatalogAccessor, CatalogCache, FeatureRecord,
    Issue, PriorityLevel, ScanAggregator, SourceFile, StatusLevel,
};
use scout_storage::MemoryStore;

use crate::common::{fast_catalog_config, ScriptedSource};

#[test]
fn style_scanner_reports_newly_property() {
    let catalog = vec![FeatureRecord::new(
        "css-properties-container-type",
        "container-type",
        Some("newly"),
    )];
    let issues = scan_style(".card { container-type: inline-size; }", "card.css", &catalog);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].feature_id, "css-properties-container-type");
    assert_eq!(issues[0].status, StatusLevel::Newly);
}

#[test]
fn script_scanner_reports_structured_clone() {
    let catalog = vec![FeatureRecord::new(
        "api-structuredClone",
        "structuredClone",
        Some("limited"),
    )];
    let issues = scan_script("const x = structuredClone(obj);", "main.js", &catalog);

    assert_eq!(
        issues,
        vec![Issue {
            file: "main.js".to_string(),
            feature_id: "api-structuredClone".to_string(),
            name: "structuredClone".to_string(),
            status: StatusLevel::Limited,
            priority: PriorityLevel::High,
            line: 1,
            column: 11,
        }]
    );
}

#[test]
fn markup_scanner_reports_popover_attribute() {
    let catalog = vec![FeatureRecord::new("html-attribute-popover", "popover", Some("limited"))];
    let issues = scan_markup("<div popover>Hi</div>", "index.html", &catalog);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].feature_id, "html-attribute-popover");
    assert_eq!(issues[0].status, StatusLevel::Limited);
}

#[test]
fn aggregate_stats_and_score() {
    let catalog = vec![
        FeatureRecord::new("html-attribute-popover", "popover", Some("limited")),
        FeatureRecord::new("html-element-search", "search", Some("limited")),
        FeatureRecord::new("html-attribute-inert", "inert", Some("limited")),
        FeatureRecord::new("api-fetch", "fetch", Some("wide")),
        FeatureRecord::new("api-resize-observer", "ResizeObserver", Some("newly")),
    ];
    let files = vec![
        SourceFile::new("page.html", "<search popover inert></search>"),
        SourceFile::new("app.js", "fetch('/a');\nnew ResizeObserver(cb);\n"),
    ];

    let aggregator = ScanAggregator::new(&catalog, &ScanConfig::default());
    let mut progress = Vec::new();
    let result = aggregator.run_scan(&files, |p| progress.push(p));

    assert_eq!(progress, vec![50, 100]);
    assert_eq!(result.stats().get(StatusLevel::Widely), 1);
    assert_eq!(result.stats().get(StatusLevel::Newly), 1);
    assert_eq!(result.stats().get(StatusLevel::Limited), 3);
    assert_eq!(result.stats().get(StatusLevel::Unknown), 0);
    assert_eq!(result.score(), 40);
    assert_eq!(result.issues()[0].file, "app.js");
}

#[tokio::test]
async fn unreachable_catalog_yields_clean_scan() {
    let source = Arc::new(ScriptedSource::failing_forever());
    let cache = CatalogCache::new(Arc::new(MemoryStore::new()));
    let accessor = CatalogAccessor::new(source.clone(), cache, &fast_catalog_config());

    let catalog = accessor.fetch_catalog().await;
    assert_eq!(source.calls(), 3);
    assert!(catalog.is_empty());
    assert!(!catalog.is_offline());

    let files = vec![
        SourceFile::new("a.js", "structuredClone(x)"),
        SourceFile::new("b.css", "a { container-type: size; }"),
        SourceFile::new("c.html", "<div popover></div>"),
    ];
    let result = ScanAggregator::new(&catalog.features, &ScanConfig::default()).run_scan(&files, |_| {});
    assert!(result.issues().is_empty());
    assert_eq!(result.score(), 100);
}
