//! Directory discovery feeding a full scan

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use scout_core::adapters::discover_files;
use scout_core::config::{ScanConfig, WorkspaceConfig};
use scout_core::features::diagnostics::Severity;
use scout_core::report::{JsonReporter, ScanReport};
use scout_core::{diagnostics_by_file, CatalogFreshness, CatalogSnapshot, ScanAggregator};
use tempfile::TempDir;

use crate::common::{sample_catalog, sample_project};

fn materialize(root: &Path) {
    for file in sample_project() {
        let path = root.join(&file.path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, file.content).unwrap();
    }
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("node_modules/pkg/index.js"), "structuredClone(x)").unwrap();
}

#[test]
fn scan_directory_end_to_end() {
    let dir = TempDir::new().unwrap();
    materialize(dir.path());

    let files = discover_files(dir.path(), &WorkspaceConfig::default()).unwrap();
    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["index.html", "src/api.js", "src/app.ts", "styles/site.css"]
    );

    let aggregator = ScanAggregator::new(&sample_catalog(), &ScanConfig::default());
    let result = aggregator.run_scan(&files, |_| {});

    let found: Vec<_> = result
        .issues()
        .iter()
        .map(|i| (i.file.as_str(), i.feature_id.as_str(), i.line))
        .collect();
    assert_eq!(
        found,
        vec![
            ("index.html", "html-element-search", 4),
            ("index.html", "html-attribute-popover", 4),
            ("index.html", "html-element-dialog", 5),
            ("src/api.js", "api-fetch", 1),
            ("src/app.ts", "api-structuredClone", 1),
            ("src/app.ts", "api-resize-observer", 2),
            ("styles/site.css", "css-properties-container-type", 2),
            ("styles/site.css", "css-properties-text-wrap", 5),
            ("styles/site.css", "css-properties-text-wrap-balance", 5),
        ]
    );
    // widely: dialog, fetch; newly: resize-observer, container-type, balance
    assert_eq!(result.score(), 56);

    let diagnostics = diagnostics_by_file(result.issues());
    assert_eq!(diagnostics.len(), 4);
    let (file, html) = &diagnostics[0];
    assert_eq!(file, "index.html");
    assert_eq!(html[0].severity, Severity::Warning);
    assert_eq!(html[2].severity, Severity::Hint);
    assert_eq!(html[0].range.start.line, 3);
}

#[test]
fn json_report_from_directory_scan() {
    let dir = TempDir::new().unwrap();
    materialize(dir.path());

    let files = discover_files(dir.path(), &WorkspaceConfig::default()).unwrap();
    let catalog = CatalogSnapshot::new(sample_catalog(), CatalogFreshness::Fresh, Some(1));
    let run = ScanAggregator::new(&catalog.features, &ScanConfig::default()).run_scan_cancellable(
        &files,
        |_| {},
        &Default::default(),
    );

    let report = ScanReport::new("project", run, &catalog);
    let json: serde_json::Value =
        serde_json::from_str(&JsonReporter::render(&report).unwrap()).unwrap();
    assert_eq!(json["filesScanned"], 4);
    assert_eq!(json["catalogFreshness"], "fresh");
    assert_eq!(json["issues"].as_array().unwrap().len(), 9);
}
