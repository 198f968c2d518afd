/*
 * Scout Core - Baseline web-feature compatibility scanner
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (FeatureRecord, Issue, Location)
 * - features/    : Vertical slices (catalog → classification → scanning → diagnostics)
 * - pipeline/    : Multi-file scan aggregation and scoring
 * - config/      : Versioned YAML configuration
 * - adapters/    : Host adapters (workspace file discovery)
 * - report/      : JSON / Markdown / terminal output
 *
 * Scanning is pure and synchronous; only the catalog accessor does I/O.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (catalog, classification, scanning, diagnostics)
pub mod features;

/// Scan aggregation
pub mod pipeline;

/// Configuration system
pub mod config;

/// Host adapters
pub mod adapters;

/// Report generation
pub mod report;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ScoutConfig};
pub use errors::{ScoutError, ScoutResult};
pub use features::catalog::{
    CatalogAccessor, CatalogCache, CatalogFreshness, CatalogSnapshot, CatalogSource,
    HttpCatalogSource,
};
pub use features::classification::{classify, priority_of, PriorityPolicy};
pub use features::diagnostics::{diagnostics_by_file, Diagnostic, Severity};
pub use features::scanning::{scan_markup, scan_script, scan_style, FeatureIndex, ScanLanguage};
pub use pipeline::{CancellationFlag, ScanAggregator, ScanResult, ScanRun, ScoreBand, SourceFile};
pub use shared::models::{FeatureRecord, Issue, Location, PriorityLevel, StatusLevel};
