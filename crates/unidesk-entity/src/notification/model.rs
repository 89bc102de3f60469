//! Notification entity and drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::issue::IssueStatus;

/// Module tag used for notifications raised by the classroom issue workflow.
pub const CLASS_ISSUES_MODULE: &str = "ClassIssues";

/// A notification delivered to one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Primary key.
    pub id: i64,
    /// Recipient.
    pub receiver_user_id: i64,
    /// Short title.
    pub title: String,
    /// Message body.
    pub message: String,
    /// Module that raised the notification.
    pub module: String,
    /// Row the notification refers to, within `module`.
    pub record_id: Option<i64>,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// When it was read.
    pub read_at: Option<DateTime<Utc>>,
    /// Visibility status; only `Active` notifications are listed.
    pub status: String,
    /// When it was created.
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Content of a notification that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub module: String,
    pub record_id: Option<i64>,
}

impl NotificationDraft {
    /// Notice sent to the reporting class leader when their issue changes status.
    pub fn issue_status_changed(complaint_id: i64, new_status: IssueStatus) -> Self {
        Self {
            title: "Issue Status Updated".to_string(),
            message: format!("Your submitted issue status has been changed to {new_status}."),
            module: CLASS_ISSUES_MODULE.to_string(),
            record_id: Some(complaint_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_status_changed_text() {
        let draft = NotificationDraft::issue_status_changed(42, IssueStatus::InReview);
        assert_eq!(draft.title, "Issue Status Updated");
        assert_eq!(
            draft.message,
            "Your submitted issue status has been changed to In Review."
        );
        assert_eq!(draft.module, "ClassIssues");
        assert_eq!(draft.record_id, Some(42));
    }
}
