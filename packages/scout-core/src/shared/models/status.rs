//! Baseline status and triage priority levels

use serde::{Deserialize, Serialize};

/// Baseline compatibility level of a feature
///
/// Serialized with the labels shown to users (`"widely available"`, ...).
/// Configuration files may also use the short forms (`limited`, `newly`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusLevel {
    #[serde(rename = "widely available", alias = "widely")]
    Widely,
    #[serde(rename = "newly available", alias = "newly")]
    Newly,
    #[serde(rename = "limited availability", alias = "limited")]
    Limited,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StatusLevel {
    /// All four levels in report order
    pub const ALL: [StatusLevel; 4] = [
        StatusLevel::Widely,
        StatusLevel::Newly,
        StatusLevel::Limited,
        StatusLevel::Unknown,
    ];

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Widely => "widely available",
            StatusLevel::Newly => "newly available",
            StatusLevel::Limited => "limited availability",
            StatusLevel::Unknown => "unknown",
        }
    }

    /// Whether uses of this level count toward the compliance score
    pub fn is_acceptable(&self) -> bool {
        matches!(self, StatusLevel::Widely | StatusLevel::Newly)
    }
}

impl Default for StatusLevel {
    fn default() -> Self {
        StatusLevel::Unknown
    }
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Triage priority of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
