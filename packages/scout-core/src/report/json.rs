//! JSON report generation

use std::path::{Path, PathBuf};

use super::ScanReport;
use crate::errors::ScoutResult;

pub struct JsonReporter;

impl JsonReporter {
    pub fn render(report: &ScanReport) -> ScoutResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    pub fn save(report: &ScanReport, output_dir: &Path) -> ScoutResult<PathBuf> {
        let path = output_dir.join("baseline-report.json");
        std::fs::write(&path, Self::render(report)?)?;
        Ok(path)
    }
}
