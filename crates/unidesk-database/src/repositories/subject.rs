//! Subject repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::academic::Subject;

use crate::error::{Violation, violation};

/// Repository for subject CRUD operations.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    pool: PgPool,
}

impl SubjectRepository {
    /// Create a new subject repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all subjects, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subjects", e))
    }

    /// Whether another subject already uses `code`.
    pub async fn code_taken(&self, code: &str, except_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM subjects WHERE code = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(code)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check subject code", e))
    }

    /// Insert a subject.
    pub async fn create(&self, name: &str, code: &str) -> AppResult<Subject> {
        sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name, code) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The code has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create subject", e),
        })
    }

    /// Update a subject. Returns `None` when it does not exist.
    pub async fn update(&self, id: i64, name: &str, code: &str) -> AppResult<Option<Subject>> {
        sqlx::query_as::<_, Subject>(
            "UPDATE subjects SET name = $2, code = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The code has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update subject", e),
        })
    }

    /// Delete a subject. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete subject because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete subject", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
