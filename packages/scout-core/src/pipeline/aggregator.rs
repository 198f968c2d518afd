//! Scan Aggregator
//!
//! Dispatches each file to one scanner by extension, reports progress
//! after every file and folds all issues into a [`ScanResult`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::result::ScanResult;
use crate::config::ScanConfig;
use crate::features::scanning::{create_registry, FeatureIndex, ScannerRegistry, ScriptNameTable};
use crate::shared::models::{FeatureRecord, Issue};

/// A file already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Cooperative cancellation, checked before each file
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Result of a possibly cancelled scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRun {
    /// Covers the files scanned before cancellation
    pub result: ScanResult,
    pub files_scanned: usize,
    pub cancelled: bool,
}

/// Percentage after `done` of `total` files, rounded half-up
fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((200 * done + total) / (2 * total)).min(100) as u8
}

pub struct ScanAggregator {
    index: FeatureIndex,
    registry: ScannerRegistry,
}

impl ScanAggregator {
    /// Build the feature index and scanners once for this catalog
    pub fn new(catalog: &[FeatureRecord], config: &ScanConfig) -> Self {
        let table = ScriptNameTable::with_extras(&config.script.extra_names);
        let index = FeatureIndex::build(catalog, &table).with_priority(config.priority);
        Self {
            index,
            registry: create_registry(config),
        }
    }

    pub fn from_parts(index: FeatureIndex, registry: ScannerRegistry) -> Self {
        Self { index, registry }
    }

    pub fn index(&self) -> &FeatureIndex {
        &self.index
    }

    /// Issues of a single file; unsupported extensions yield none
    pub fn scan_file(&self, file: &SourceFile) -> Vec<Issue> {
        match self.registry.get_for_path(&file.path) {
            Some(scanner) => scanner.scan(&file.content, &file.path, &self.index),
            None => {
                tracing::debug!("Skipping {} (unsupported extension)", file.path);
                Vec::new()
            }
        }
    }

    pub fn run_scan<F>(&self, files: &[SourceFile], on_progress: F) -> ScanResult
    where
        F: FnMut(u8),
    {
        self.run_scan_cancellable(files, on_progress, &CancellationFlag::new())
            .result
    }

    pub fn run_scan_cancellable<F>(
        &self,
        files: &[SourceFile],
        mut on_progress: F,
        cancel: &CancellationFlag,
    ) -> ScanRun
    where
        F: FnMut(u8),
    {
        if files.is_empty() {
            on_progress(100);
            return ScanRun {
                result: ScanResult::empty(),
                files_scanned: 0,
                cancelled: false,
            };
        }

        let mut issues = Vec::new();
        let mut files_scanned = 0;
        let mut cancelled = false;

        for (i, file) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!("Scan cancelled after {}/{} files", i, files.len());
                cancelled = true;
                break;
            }
            issues.extend(self.scan_file(file));
            files_scanned += 1;
            on_progress(progress_percent(i + 1, files.len()));
        }

        let result = ScanResult::from_issues(issues);
        tracing::info!(
            "Scanned {} files: {} issues, score {}",
            files_scanned,
            result.issues().len(),
            result.score()
        );

        ScanRun {
            result,
            files_scanned,
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::StatusLevel;

    fn catalog() -> Vec<FeatureRecord> {
        vec![
            FeatureRecord::new("api-structuredClone", "structuredClone", Some("limited")),
            FeatureRecord::new("css-properties-container-type", "container-type", Some("newly")),
            FeatureRecord::new("html-attribute-popover", "popover", Some("limited")),
        ]
    }

    fn files() -> Vec<SourceFile> {
        vec![
            SourceFile::new("src/main.js", "structuredClone(a);"),
            SourceFile::new("README.md", "structuredClone"),
            SourceFile::new("index.html", "<div popover></div>"),
            SourceFile::new("app.css", ".c { container-type: size; }"),
        ]
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(3, 3), 100);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn test_run_scan() {
        let aggregator = ScanAggregator::new(&catalog(), &ScanConfig::default());
        let mut progress = Vec::new();
        let result = aggregator.run_scan(&files(), |p| progress.push(p));

        assert_eq!(progress, vec![25, 50, 75, 100]);
        assert_eq!(result.issues().len(), 3);
        let files: Vec<_> = result.issues().iter().map(|i| i.file.as_str()).collect();
        assert_eq!(files, vec!["app.css", "index.html", "src/main.js"]);
        assert_eq!(result.stats().get(StatusLevel::Limited), 2);
        assert_eq!(result.stats().get(StatusLevel::Newly), 1);
        assert_eq!(result.score(), 33);
    }

    #[test]
    fn test_empty_file_list() {
        let aggregator = ScanAggregator::new(&catalog(), &ScanConfig::default());
        let mut progress = Vec::new();
        let result = aggregator.run_scan(&[], |p| progress.push(p));
        assert_eq!(progress, vec![100]);
        assert_eq!(result.score(), 100);
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let aggregator = ScanAggregator::new(&[], &ScanConfig::default());
        let result = aggregator.run_scan(&files(), |_| {});
        assert!(result.issues().is_empty());
        assert_eq!(result.score(), 100);
    }

    #[test]
    fn test_cancel_before_start() {
        let aggregator = ScanAggregator::new(&catalog(), &ScanConfig::default());
        let cancel = CancellationFlag::new();
        cancel.cancel();

        let mut calls = 0;
        let run = aggregator.run_scan_cancellable(&files(), |_| calls += 1, &cancel);
        assert!(run.cancelled);
        assert_eq!(run.files_scanned, 0);
        assert_eq!(calls, 0);
        assert_eq!(run.result.score(), 100);
    }

    #[test]
    fn test_cancel_midway() {
        let aggregator = ScanAggregator::new(&catalog(), &ScanConfig::default());
        let cancel = CancellationFlag::new();
        let trigger = cancel.clone();

        let run = aggregator.run_scan_cancellable(
            &files(),
            |p| {
                if p >= 50 {
                    trigger.cancel();
                }
            },
            &cancel,
        );
        assert!(run.cancelled);
        assert_eq!(run.files_scanned, 2);
        assert_eq!(run.result.issues().len(), 1);
    }

    #[test]
    fn test_extra_script_names() {
        let mut config = ScanConfig::default();
        config
            .script
            .extra_names
            .insert("navigation".to_string(), "navigation-api".to_string());
        let catalog = vec![FeatureRecord::new("api-navigation-api", "Navigation API", Some("limited"))];

        let aggregator = ScanAggregator::new(&catalog, &config);
        let result = aggregator.run_scan(&[SourceFile::new("a.ts", "navigation.navigate('/');")], |_| {});
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].feature_id, "api-navigation-api");
    }
}
