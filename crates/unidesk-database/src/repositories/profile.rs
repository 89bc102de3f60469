//! Lookups of the people linked to a user account.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::user::TeacherDetails;

/// Repository resolving the student or teacher record behind an account.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Name of the student linked to the account, if any.
    pub async fn student_name(&self, user_id: i64) -> AppResult<Option<String>> {
        sqlx::query_scalar("SELECT name FROM students WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find student", e))
    }

    /// Details of the teacher linked to the account, if any.
    pub async fn teacher_details(&self, user_id: i64) -> AppResult<Option<TeacherDetails>> {
        sqlx::query_as::<_, TeacherDetails>(
            "SELECT name, teacher_code, phone, email, gender, status FROM teachers WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find teacher", e))
    }
}
