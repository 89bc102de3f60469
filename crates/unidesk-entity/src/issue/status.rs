//! Issue status and the rules for moving between statuses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use unidesk_core::AppError;

/// Lifecycle status of a classroom complaint.
///
/// A complaint without an assignment row is `Pending`, which is why this is
/// the `Default`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "issue_status")]
pub enum IssueStatus {
    /// Reported, nobody has picked it up.
    #[default]
    Pending,
    /// Being looked at.
    #[serde(rename = "In Review")]
    #[sqlx(rename = "In Review")]
    InReview,
    /// Fixed, awaiting confirmation.
    Resolved,
    /// Closed.
    Completed,
}

impl IssueStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [IssueStatus; 4] = [
        Self::Pending,
        Self::InReview,
        Self::Resolved,
        Self::Completed,
    ];

    /// Position in the lifecycle, starting at 0 for `Pending`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InReview => 1,
            Self::Resolved => 2,
            Self::Completed => 3,
        }
    }

    /// Return the status as displayed and stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::Resolved => "Resolved",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid status: '{s}'. Expected one of: Pending, In Review, Resolved, Completed"
                ))
            })
    }
}

/// Which status changes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Any status may follow any other.
    Permissive,
    /// A status may not move back to an earlier lifecycle stage.
    ForwardOnly,
}

impl TransitionPolicy {
    /// Build the policy from the `issues.enforce_forward_transitions` flag.
    pub fn from_flag(enforce_forward: bool) -> Self {
        if enforce_forward {
            Self::ForwardOnly
        } else {
            Self::Permissive
        }
    }

    /// Check a transition. Staying on the same status is always allowed.
    pub fn check(&self, from: IssueStatus, to: IssueStatus) -> Result<(), AppError> {
        match self {
            Self::Permissive => Ok(()),
            Self::ForwardOnly if to.rank() >= from.rank() => Ok(()),
            Self::ForwardOnly => Err(AppError::conflict(format!(
                "Cannot move issue from {from} back to {to}"
            ))),
        }
    }
}
