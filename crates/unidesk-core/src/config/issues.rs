//! Classroom issue workflow configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the classroom issue workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuesConfig {
    /// Minimum number of complaints every class leader should have.
    #[serde(default = "default_min_backlog")]
    pub min_backlog: usize,
    /// Top up leader backlogs before serving the issue list and stats.
    #[serde(default = "default_true")]
    pub backlog_on_read: bool,
    /// Reject status changes that move an issue backwards.
    #[serde(default)]
    pub enforce_forward_transitions: bool,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            min_backlog: default_min_backlog(),
            backlog_on_read: true,
            enforce_forward_transitions: false,
        }
    }
}

fn default_min_backlog() -> usize {
    2
}

fn default_true() -> bool {
    true
}
