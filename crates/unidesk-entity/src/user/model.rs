//! User account rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::channel::AccessChannel;
use super::role::UserRole;
use super::status::AccountStatus;

/// A user account joined with its role name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    /// Primary key.
    pub id: i64,
    /// Role foreign key.
    pub role_id: i64,
    /// Role name from the `roles` table.
    pub role_name: String,
    /// Unique login name.
    pub username: String,
    /// Optional display name.
    pub full_name: Option<String>,
    /// Account status.
    pub status: AccountStatus,
    /// Allowed client surfaces.
    pub access_channel: AccessChannel,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Typed role.
    pub fn role(&self) -> UserRole {
        UserRole::from_name(&self.role_name)
    }
}

/// Everything the login flow needs about one account.
#[derive(Debug, Clone, FromRow)]
pub struct LoginRecord {
    /// Primary key.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Stored password hash (Argon2 PHC string or legacy SHA-256 hex).
    pub password_hash: String,
    /// Role name.
    pub role_name: String,
    /// Teacher name when the account belongs to a teacher, else the username.
    pub display_name: String,
    /// Account status.
    pub status: AccountStatus,
    /// Allowed client surfaces.
    pub access_channel: AccessChannel,
}

/// Public part of a login record returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub role_name: String,
    pub status: AccountStatus,
    pub access_channel: AccessChannel,
}

impl From<LoginRecord> for LoginUser {
    fn from(record: LoginRecord) -> Self {
        Self {
            user_id: record.id,
            username: record.username,
            display_name: record.display_name,
            role_name: record.role_name,
            status: record.status,
            access_channel: record.access_channel,
        }
    }
}
