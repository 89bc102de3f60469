//! Merged profile of the signed-in user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::channel::AccessChannel;

/// Which record the profile's full name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// The linked student record.
    Students,
    /// The linked teacher record.
    Teachers,
    /// No linked person; the username is used.
    Users,
}

/// Contact details of a teacher account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeacherDetails {
    pub name: String,
    pub teacher_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub status: Option<String>,
}

/// Profile returned by `GET /api/profile/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub username: String,
    pub role_id: i64,
    pub role_name: String,
    pub access_channel: AccessChannel,
    pub full_name: String,
    pub source: ProfileSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_details: Option<TeacherDetails>,
}
