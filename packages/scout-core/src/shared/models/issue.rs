//! Detected feature occurrence

use serde::{Deserialize, Serialize};

use super::{Location, PriorityLevel, StatusLevel};

/// One occurrence of a catalog feature in a scanned file
///
/// Only `priority` may change after creation, and only through
/// [`crate::pipeline::ScanResult::with_issue_priority`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub file: String,
    pub feature_id: String,
    /// Feature display name captured at scan time
    pub name: String,
    pub status: StatusLevel,
    pub priority: PriorityLevel,
    /// 1-indexed
    pub line: u32,
    /// 1-indexed, UTF-8 bytes from line start
    pub column: u32,
}

impl Issue {
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_json_shape() {
        let issue = Issue {
            file: "src/app.ts".to_string(),
            feature_id: "api-structuredClone".to_string(),
            name: "structuredClone".to_string(),
            status: StatusLevel::Limited,
            priority: PriorityLevel::High,
            line: 1,
            column: 11,
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["featureId"], "api-structuredClone");
        assert_eq!(value["status"], "limited availability");
        assert_eq!(value["priority"], "High");
        assert_eq!(issue.location(), Location::new(1, 11));
    }
}
