//! Semester repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::academic::Semester;

use crate::error::{Violation, violation};

/// Repository for semester CRUD operations.
#[derive(Debug, Clone)]
pub struct SemesterRepository {
    pool: PgPool,
}

impl SemesterRepository {
    /// Create a new semester repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all semesters, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Semester>> {
        sqlx::query_as::<_, Semester>("SELECT * FROM semesters ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list semesters", e))
    }

    /// Whether another semester already uses `name`.
    pub async fn name_taken(&self, name: &str, except_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM semesters WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check semester name", e))
    }

    /// Insert a semester.
    pub async fn create(&self, name: &str) -> AppResult<Semester> {
        sqlx::query_as::<_, Semester>("INSERT INTO semesters (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => AppError::with_source(
                    ErrorKind::Validation,
                    "The semester name has already been taken.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to create semester", e),
            })
    }

    /// Rename a semester. Returns `None` when it does not exist.
    pub async fn update(&self, id: i64, name: &str) -> AppResult<Option<Semester>> {
        sqlx::query_as::<_, Semester>(
            "UPDATE semesters SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The semester name has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update semester", e),
        })
    }

    /// Delete a semester. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM semesters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete semester because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete semester", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
