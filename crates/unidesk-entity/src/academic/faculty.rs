//! Faculty entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A faculty of the university.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faculty {
    /// Primary key.
    pub id: i64,
    /// Unique faculty name.
    pub name: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
