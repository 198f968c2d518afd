//! Scan pipeline
//!
//! - `aggregator`: multi-file scan with progress and cancellation
//! - `result`: scan result, stats and score

pub mod aggregator;
pub mod result;

pub use aggregator::{CancellationFlag, ScanAggregator, ScanRun, SourceFile};
pub use result::{compliance_score, ScanResult, ScoreBand, StatusCounts};
