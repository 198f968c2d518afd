//! Shared models and utilities
//!
//! - `models/`: feature records, status levels, issues, source locations
//! - `utils/`: tree-sitter traversal helpers shared by the scanners

pub mod models;
pub mod utils;
