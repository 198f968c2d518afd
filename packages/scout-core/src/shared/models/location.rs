//! Source location types
//!
//! Lines and columns are both 1-indexed. Columns count UTF-8 bytes from the
//! start of the line, which is the unit tree-sitter reports.

use serde::{Deserialize, Serialize};

/// Single location in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Start of the file (1:1)
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Convert a tree-sitter point (0-indexed row/column)
    pub fn from_point(point: tree_sitter::Point) -> Self {
        Self::new(point.row as u32 + 1, point.column as u32 + 1)
    }

    /// 0-indexed `(line, column)` pair for hosts that count from zero
    pub fn to_zero_based(&self) -> (u32, u32) {
        (self.line.saturating_sub(1), self.column.saturating_sub(1))
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
