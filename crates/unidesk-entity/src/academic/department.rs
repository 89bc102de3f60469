//! Department entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A department, listed together with the name of its faculty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Primary key.
    pub id: i64,
    /// Unique department name.
    pub name: String,
    /// Owning faculty.
    pub faculty_id: i64,
    /// Name of the owning faculty.
    pub faculty_name: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
