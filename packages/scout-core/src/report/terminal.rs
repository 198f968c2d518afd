//! Terminal (pretty-print) report generation

use std::fmt::Write;

use super::ScanReport;
use crate::shared::models::StatusLevel;

pub struct TerminalReporter;

impl TerminalReporter {
    pub fn print(report: &ScanReport) {
        print!("{}", Self::render(report));
    }

    pub fn render(report: &ScanReport) -> String {
        let result = &report.result;
        let mut out = String::new();

        let _ = writeln!(out, "\n┌──────────────────────────────────────────────────────────┐");
        let _ = writeln!(out, "│ Baseline Scan Summary                                    │");
        let _ = writeln!(out, "├──────────────────────────────────────────────────────────┤");
        let _ = writeln!(
            out,
            "│  {:<54}  │",
            format!("Score:        {} ({})", result.score(), result.band().as_str())
        );
        let _ = writeln!(out, "│  {:<54}  │", format!("Files:        {}", report.files_scanned));
        let _ = writeln!(out, "│  {:<54}  │", format!("Issues:       {}", result.issues().len()));
        for status in StatusLevel::ALL {
            let _ = writeln!(
                out,
                "│  {:<54}  │",
                format!("  {:<22}{}", status.label(), result.stats().get(status))
            );
        }
        let catalog = if report.offline {
            format!("Catalog:      {} features (offline)", report.catalog_features)
        } else {
            format!("Catalog:      {} features", report.catalog_features)
        };
        let _ = writeln!(out, "│  {:<54}  │", catalog);
        let _ = writeln!(out, "└──────────────────────────────────────────────────────────┘");

        if report.cancelled {
            let _ = writeln!(out, "\nScan cancelled; results are partial.");
        }

        if !result.issues().is_empty() {
            let _ = writeln!(out);
        }
        for issue in result.issues() {
            let _ = writeln!(
                out,
                "{}:{}:{}  [{}] {} ({}, {})",
                issue.file,
                issue.line,
                issue.column,
                issue.priority,
                issue.name,
                issue.feature_id,
                issue.status
            );
        }
        out
    }
}
