//! Parent / guardian entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A parent or guardian contact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Parent {
    /// Primary key.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Main phone number.
    pub phone_primary: Option<String>,
    /// Secondary phone number.
    pub phone_secondary: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
