//! Snapshot and plan types for topping up class-leader backlogs.

use serde::{Deserialize, Serialize};

/// Description stored on complaints generated to fill a leader's backlog.
pub const SEEDED_DESCRIPTION: &str = "Classroom issue generated from issue template.";

/// One leader and the templates they already have complaints for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderBacklog {
    pub leader_id: i64,
    /// Template of every existing complaint, duplicates included.
    pub template_ids: Vec<i64>,
}

impl LeaderBacklog {
    /// Number of complaints the leader already has.
    pub fn complaint_count(&self) -> usize {
        self.template_ids.len()
    }
}

/// A complaint to generate: `template_id` filed under `leader_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogSlot {
    pub leader_id: i64,
    pub template_id: i64,
}
