//! Markdown report generation

use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::ScanReport;
use crate::errors::ScoutResult;
use crate::shared::models::{PriorityLevel, StatusLevel};

pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn save(report: &ScanReport, output_dir: &Path) -> ScoutResult<PathBuf> {
        let path = output_dir.join("baseline-report.md");
        std::fs::write(&path, Self::generate(report))?;
        Ok(path)
    }

    pub fn generate(report: &ScanReport) -> String {
        let result = &report.result;
        let mut md = String::new();

        let _ = writeln!(md, "# Baseline Report: {}\n", report.root);
        let _ = writeln!(md, "**Generated**: {}", report.generated_at.to_rfc3339());
        let _ = writeln!(
            md,
            "**Catalog**: {} features ({:?}){}\n",
            report.catalog_features,
            report.catalog_freshness,
            if report.offline { ", offline" } else { "" }
        );

        let _ = writeln!(md, "## Summary\n");
        let _ = writeln!(md, "| Metric | Value |");
        let _ = writeln!(md, "|--------|-------|");
        let _ = writeln!(md, "| Score | {} ({}) |", result.score(), result.band().as_str());
        let _ = writeln!(md, "| Files scanned | {} |", report.files_scanned);
        for status in StatusLevel::ALL {
            let _ = writeln!(md, "| {} | {} |", status.label(), result.stats().get(status));
        }

        for priority in [PriorityLevel::High, PriorityLevel::Medium, PriorityLevel::Low] {
            let issues: Vec<_> = result
                .issues()
                .iter()
                .filter(|i| i.priority == priority)
                .collect();
            if issues.is_empty() {
                continue;
            }
            let _ = writeln!(md, "\n## {} Priority ({})\n", priority, issues.len());
            let _ = writeln!(md, "| Location | Feature | Identifier | Status |");
            let _ = writeln!(md, "|----------|---------|------------|--------|");
            for issue in issues {
                let _ = writeln!(
                    md,
                    "| `{}:{}:{}` | {} | `{}` | {} |",
                    issue.file,
                    issue.line,
                    issue.column,
                    issue.name.replace('|', "\\|"),
                    issue.feature_id,
                    issue.status
                );
            }
        }
        md
    }
}
