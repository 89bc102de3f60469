//! School entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A school a student previously attended.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct School {
    /// Primary key.
    pub id: i64,
    /// Unique school name.
    pub name: String,
    /// Postal address.
    pub address: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
