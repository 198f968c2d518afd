//! Feature modules
//!
//! Vertical slices, leaves first:
//! - `classification`: status code → status level → priority
//! - `catalog`: fetching and caching the feature catalog
//! - `scanning`: script, style and markup scanners
//! - `diagnostics`: conversion of issues into editor diagnostics

pub mod catalog;
pub mod classification;
pub mod diagnostics;
pub mod scanning;
