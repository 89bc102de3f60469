//! Issue list rows, history events and transition results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::IssueStatus;

/// One complaint as shown in the issue list and detail view.
///
/// Leader and class fields are empty for complaints whose leader row has
/// since been removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueSummary {
    pub id: i64,
    pub template_id: i64,
    pub issue_name: String,
    pub category_id: i64,
    pub category_name: String,
    pub class_id: Option<i64>,
    pub class_name: Option<String>,
    pub leader_student_id: Option<i64>,
    pub leader_name: Option<String>,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a complaint's status history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IssueStatusEvent {
    pub id: i64,
    pub complaint_id: i64,
    pub old_status: IssueStatus,
    pub new_status: IssueStatus,
    pub changed_by_user_id: i64,
    /// Display name of the acting user.
    pub changed_by_name: String,
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}

/// A complaint with its full history, oldest event first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueDetail {
    pub issue: IssueSummary,
    pub history: Vec<IssueStatusEvent>,
}

/// Optional narrowing of the issue list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub class_id: Option<i64>,
}

/// Result of a committed status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub issue_id: i64,
    pub old_status: IssueStatus,
    pub new_status: IssueStatus,
    /// The history row written for this transition.
    pub event_id: i64,
    /// Notification sent to the reporting leader, when they have a user account.
    pub notification_id: Option<i64>,
}
