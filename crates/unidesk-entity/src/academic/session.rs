//! Academic session (academic year) entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An academic year with its calendar bounds.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AcademicSession {
    /// Primary key.
    pub id: i64,
    /// First day of the session.
    pub start_date: NaiveDate,
    /// Last day of the session, never before `start_date`.
    pub end_date: NaiveDate,
    /// Unique label, e.g. `"2025/2026"`.
    pub active_year: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
