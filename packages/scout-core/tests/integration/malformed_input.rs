//! Scanners on broken input

use scout_core::{scan_markup, scan_script, scan_style, ScanAggregator, SourceFile};
use scout_core::config::ScanConfig;

use crate::common::sample_catalog;

#[test]
fn unterminated_css_block_keeps_earlier_rules() {
    let source = "h1 { text-wrap: balance; }\n.card { container-type: inline-size;\n";
    let issues = scan_style(source, "broken.css", &sample_catalog());
    assert!(issues
        .iter()
        .any(|i| i.feature_id == "css-properties-text-wrap" && i.line == 1));
}

#[test]
fn garbage_inputs_do_not_panic() {
    let inputs = [
        "",
        "}}}}{{{{",
        "@media {",
        "<<<>>>",
        "function (",
        "\u{0}\u{1}\u{2}",
        "/* unterminated comment",
        "<div popover",
    ];
    let catalog = sample_catalog();
    for input in inputs {
        let _ = scan_script(input, "x.tsx", &catalog);
        let _ = scan_style(input, "x.css", &catalog);
        let _ = scan_markup(input, "x.html", &catalog);
    }
}

#[test]
fn broken_script_still_reports_recovered_identifiers() {
    let source = "const ok = structuredClone(a);\nfunction broken( {\n";
    let issues = scan_script(source, "broken.js", &sample_catalog());
    assert!(issues
        .iter()
        .any(|i| i.feature_id == "api-structuredClone" && i.line == 1));
}

#[test]
fn aggregate_over_broken_files_completes() {
    let files = vec![
        SourceFile::new("a.css", "a { gap: "),
        SourceFile::new("b.html", "<section <div>"),
        SourceFile::new("c.ts", "let x: = ;"),
    ];
    let aggregator = ScanAggregator::new(&sample_catalog(), &ScanConfig::default());
    let mut updates = 0;
    let result = aggregator.run_scan(&files, |_| updates += 1);

    assert_eq!(updates, 3);
    assert!(result.score() <= 100);
    assert_eq!(result.stats().total(), result.issues().len());
}
