//! Classroom issues: templates, complaints, assignments and status history.

pub mod backlog;
pub mod model;
pub mod stats;
pub mod status;

pub use backlog::{BacklogSlot, LeaderBacklog};
pub use model::{IssueDetail, IssueFilter, IssueStatusEvent, IssueSummary, TransitionOutcome};
pub use stats::IssueStats;
pub use status::{IssueStatus, TransitionPolicy};
