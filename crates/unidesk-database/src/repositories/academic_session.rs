//! Academic session repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::academic::AcademicSession;

use crate::error::{Violation, violation};

/// Repository for academic session CRUD operations.
#[derive(Debug, Clone)]
pub struct AcademicSessionRepository {
    pool: PgPool,
}

impl AcademicSessionRepository {
    /// Create a new academic session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all sessions, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<AcademicSession>> {
        sqlx::query_as::<_, AcademicSession>("SELECT * FROM academic_sessions ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list academic sessions", e)
            })
    }

    /// Whether another session already uses the `active_year` label.
    pub async fn year_taken(&self, active_year: &str, except_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM academic_sessions \
             WHERE active_year = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(active_year)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check academic year", e)
        })
    }

    /// Insert a session.
    pub async fn create(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active_year: &str,
    ) -> AppResult<AcademicSession> {
        sqlx::query_as::<_, AcademicSession>(
            "INSERT INTO academic_sessions (start_date, end_date, active_year) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(start_date)
        .bind(end_date)
        .bind(active_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The active year has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create academic session", e),
        })
    }

    /// Update a session. Returns `None` when it does not exist.
    pub async fn update(
        &self,
        id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active_year: &str,
    ) -> AppResult<Option<AcademicSession>> {
        sqlx::query_as::<_, AcademicSession>(
            "UPDATE academic_sessions \
             SET start_date = $2, end_date = $3, active_year = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(start_date)
        .bind(end_date)
        .bind(active_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The active year has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update academic session", e),
        })
    }

    /// Delete a session. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM academic_sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete academic session because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(
                    ErrorKind::Database,
                    "Failed to delete academic session",
                    e,
                ),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
