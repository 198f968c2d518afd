//! Editor diagnostics
//!
//! Converts issues into the 0-indexed ranges editors expect. This is the
//! only place where positions leave the 1-indexed core convention.

use serde::{Deserialize, Serialize};

use crate::shared::models::{Issue, StatusLevel};

/// Diagnostic source label
pub const DIAGNOSTIC_SOURCE: &str = "Baseline Scout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Information,
    Hint,
}

impl Severity {
    pub fn of(status: StatusLevel) -> Self {
        match status {
            StatusLevel::Limited => Severity::Warning,
            StatusLevel::Newly => Severity::Information,
            StatusLevel::Widely | StatusLevel::Unknown => Severity::Hint,
        }
    }
}

/// Zero-based position
///
/// `character` counts UTF-8 bytes from the start of the line, the same
/// unit the scanners report columns in. Hosts that address text in UTF-16
/// units convert against the line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Single-line range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub range: Range,
    pub severity: Severity,
    pub message: String,
    /// Feature identifier
    pub code: String,
    pub source: String,
}

impl Diagnostic {
    pub fn from_issue(issue: &Issue) -> Self {
        let (line, character) = issue.location().to_zero_based();
        let width = u32::try_from(issue.name.len()).unwrap_or(u32::MAX);

        Self {
            file: issue.file.clone(),
            range: Range {
                start: Position { line, character },
                end: Position {
                    line,
                    character: character.saturating_add(width),
                },
            },
            severity: Severity::of(issue.status),
            message: format!(
                "The '{}' feature has {} support according to Baseline.",
                issue.name, issue.status
            ),
            code: issue.feature_id.clone(),
            source: DIAGNOSTIC_SOURCE.to_string(),
        }
    }
}

/// Group diagnostics per file, files in first-seen order
pub fn diagnostics_by_file(issues: &[Issue]) -> Vec<(String, Vec<Diagnostic>)> {
    let mut groups: Vec<(String, Vec<Diagnostic>)> = Vec::new();
    for issue in issues {
        let diagnostic = Diagnostic::from_issue(issue);
        match groups.iter_mut().find(|(file, _)| *file == issue.file) {
            Some((_, list)) => list.push(diagnostic),
            None => groups.push((issue.file.clone(), vec![diagnostic])),
        }
    }
    groups
}
