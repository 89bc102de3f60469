//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use unidesk_core::error::AppError;
use unidesk_entity::issue::{IssueFilter, IssueStatus};

use crate::extractors::path::parse_id;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100, message = "The username field is required."))]
    pub username: String,
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

/// Create or update a faculty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FacultyRequest {
    #[validate(length(min = 1, max = 150, message = "The name must be 1 to 150 characters."))]
    pub name: String,
}

/// Create or update a department.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DepartmentRequest {
    #[validate(length(min = 1, max = 150, message = "The name must be 1 to 150 characters."))]
    pub name: String,
    #[validate(range(min = 1, message = "The selected faculty is invalid."))]
    pub faculty_id: i64,
}

/// Create or update a semester.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SemesterRequest {
    #[validate(length(min = 1, max = 50, message = "The name must be 1 to 50 characters."))]
    pub name: String,
}

/// Create or update a subject.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubjectRequest {
    #[validate(length(min = 1, max = 150, message = "The name must be 1 to 150 characters."))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "The code must be 1 to 50 characters."))]
    pub code: String,
}

/// Create or update an academic session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AcademicSessionRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, max = 30, message = "The active year must be 1 to 30 characters."))]
    pub active_year: String,
}

/// Create or update a school.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SchoolRequest {
    #[validate(length(min = 1, max = 150, message = "The name must be 1 to 150 characters."))]
    pub name: String,
    #[validate(length(max = 255, message = "The address may not be greater than 255 characters."))]
    pub address: Option<String>,
}

/// Create or update a parent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParentRequest {
    #[validate(length(min = 1, max = 120, message = "The name must be 1 to 120 characters."))]
    pub name: String,
    #[validate(length(max = 30, message = "The primary phone may not be greater than 30 characters."))]
    pub phone_primary: Option<String>,
    #[validate(length(max = 30, message = "The secondary phone may not be greater than 30 characters."))]
    pub phone_secondary: Option<String>,
}

/// Body of `PUT /faculty/classes/{class_id}/leader`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeLeaderRequest {
    #[serde(rename = "std_id")]
    #[validate(range(min = 1, message = "The selected student is invalid."))]
    pub student_id: i64,
}

/// Body of `POST /faculty/students/migrate`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MigrateStudentRequest {
    #[serde(rename = "std_id")]
    #[validate(range(min = 1, message = "The selected student is invalid."))]
    pub student_id: i64,
    #[serde(rename = "new_cls_no")]
    #[validate(range(min = 1, message = "The selected class is invalid."))]
    pub new_class_id: i64,
}

/// Body of `PUT /faculty/issues/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateIssueStatusRequest {
    pub new_status: IssueStatus,
    #[validate(length(max = 1000, message = "The note may not be greater than 1000 characters."))]
    pub note: Option<String>,
    /// Must match the authenticated user when present.
    pub user_id: Option<i64>,
}

/// Query string of `GET /faculty/issues`.
///
/// Kept as raw strings so that empty parameters (`?status=`) mean "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueListQuery {
    pub status: Option<String>,
    pub class_id: Option<String>,
}

impl IssueListQuery {
    /// Parse into a typed filter.
    pub fn into_filter(self) -> Result<IssueFilter, AppError> {
        let status = non_empty(self.status)
            .map(|s| s.parse::<IssueStatus>())
            .transpose()?;
        let class_id = non_empty(self.class_id)
            .map(|s| parse_id(&s))
            .transpose()?;
        Ok(IssueFilter { status, class_id })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
