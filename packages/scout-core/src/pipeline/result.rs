//! Scan result
//!
//! A [`ScanResult`] can only be built from an issue list: the per-status
//! counts and the score are derived from it, so `stats` always sums to
//! `issues.len()`.

use serde::Serialize;

use crate::shared::models::{Issue, PriorityLevel, StatusLevel};

/// Issue count per status level (all four keys always present)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "widely available")]
    pub widely: usize,
    #[serde(rename = "newly available")]
    pub newly: usize,
    #[serde(rename = "limited availability")]
    pub limited: usize,
    #[serde(rename = "unknown")]
    pub unknown: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: StatusLevel) {
        match status {
            StatusLevel::Widely => self.widely += 1,
            StatusLevel::Newly => self.newly += 1,
            StatusLevel::Limited => self.limited += 1,
            StatusLevel::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, status: StatusLevel) -> usize {
        match status {
            StatusLevel::Widely => self.widely,
            StatusLevel::Newly => self.newly,
            StatusLevel::Limited => self.limited,
            StatusLevel::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.widely + self.newly + self.limited + self.unknown
    }

    /// Uses that count toward the score
    pub fn acceptable(&self) -> usize {
        self.widely + self.newly
    }
}

/// Compliance score: `round(100 * acceptable / total)`, half-up; 100 when empty
pub fn compliance_score(stats: &StatusCounts) -> u8 {
    let total = stats.total();
    if total == 0 {
        return 100;
    }
    let score = (200 * stats.acceptable() + total) / (2 * total);
    score.min(100) as u8
}

/// Score band used for colouring summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 90 and above
    Good,
    /// 70 to 89
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Good,
            70..=89 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

/// Outcome of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    score: u8,
    stats: StatusCounts,
    issues: Vec<Issue>,
}

impl ScanResult {
    /// Sort issues by file (stable) and derive stats and score
    pub fn from_issues(mut issues: Vec<Issue>) -> Self {
        issues.sort_by(|a, b| a.file.cmp(&b.file));

        let mut stats = StatusCounts::default();
        for issue in &issues {
            stats.record(issue.status);
        }

        Self {
            score: compliance_score(&stats),
            stats,
            issues,
        }
    }

    pub fn empty() -> Self {
        Self::from_issues(Vec::new())
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }

    pub fn stats(&self) -> &StatusCounts {
        &self.stats
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Copy of this result with one issue re-prioritised
    ///
    /// Returns `None` when `index` is out of range. Stats and score do not
    /// depend on priority and are carried over unchanged.
    pub fn with_issue_priority(&self, index: usize, priority: PriorityLevel) -> Option<Self> {
        if index >= self.issues.len() {
            return None;
        }
        let mut next = self.clone();
        next.issues[index].priority = priority;
        Some(next)
    }
}
