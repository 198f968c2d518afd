//! Status Classifier
//!
//! Pure, total mappings with no I/O:
//! - raw compatibility code → [`StatusLevel`]
//! - [`StatusLevel`] → [`PriorityLevel`] through a [`PriorityPolicy`]
//!
//! Missing or unrecognized data classifies as `Unknown`; nothing here can
//! fail.

use serde::{Deserialize, Serialize};

use crate::shared::models::{FeatureRecord, PriorityLevel, StatusLevel};

/// Map a raw catalog code to a status level
pub fn classify_code(code: Option<&str>) -> StatusLevel {
    match code {
        Some("wide") => StatusLevel::Widely,
        Some("newly") => StatusLevel::Newly,
        Some("limited") => StatusLevel::Limited,
        _ => StatusLevel::Unknown,
    }
}

/// Classify a feature record (absent record or baseline → `Unknown`)
pub fn classify(record: Option<&FeatureRecord>) -> StatusLevel {
    classify_code(record.and_then(|r| r.status_code()))
}

/// Priority under the default policy
pub fn priority_of(status: StatusLevel) -> PriorityLevel {
    PriorityPolicy::default().priority_of(status)
}

/// Status → priority mapping
///
/// One explicit entry per status level, so the mapping is total by
/// construction. The default treats feature gaps as the urgent work item:
/// Limited → High, Newly → Medium, Widely and Unknown → Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityPolicy {
    pub widely: PriorityLevel,
    pub newly: PriorityLevel,
    pub limited: PriorityLevel,
    pub unknown: PriorityLevel,
}

impl PriorityPolicy {
    pub fn priority_of(&self, status: StatusLevel) -> PriorityLevel {
        match status {
            StatusLevel::Widely => self.widely,
            StatusLevel::Newly => self.newly,
            StatusLevel::Limited => self.limited,
            StatusLevel::Unknown => self.unknown,
        }
    }
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            widely: PriorityLevel::Low,
            newly: PriorityLevel::Medium,
            limited: PriorityLevel::High,
            unknown: PriorityLevel::Low,
        }
    }
}
