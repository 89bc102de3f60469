//! Dashboard counters.

use serde::{Deserialize, Serialize};

use super::status::IssueStatus;

/// Issue counts per status.
///
/// `total == pending + in_review + resolved + completed` always holds:
/// complaints without an assignment are counted as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub total: i64,
    pub pending: i64,
    pub in_review: i64,
    pub resolved: i64,
    pub completed: i64,
}

impl IssueStats {
    /// Build the counters from the complaint total and the assignment counts per status.
    pub fn from_counts(total: i64, assigned: &[(IssueStatus, i64)]) -> Self {
        let mut stats = Self {
            total,
            ..Self::default()
        };

        let mut assigned_total = 0;
        for &(status, count) in assigned {
            assigned_total += count;
            match status {
                IssueStatus::Pending => stats.pending += count,
                IssueStatus::InReview => stats.in_review += count,
                IssueStatus::Resolved => stats.resolved += count,
                IssueStatus::Completed => stats.completed += count,
            }
        }

        stats.pending += total - assigned_total;
        stats
    }

    /// Sum of the per-status counters.
    pub fn status_sum(&self) -> i64 {
        self.pending + self.in_review + self.resolved + self.completed
    }
}
