//! Faculty repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::academic::Faculty;

use crate::error::{Violation, violation};

/// Repository for faculty CRUD operations.
#[derive(Debug, Clone)]
pub struct FacultyRepository {
    pool: PgPool,
}

impl FacultyRepository {
    /// Create a new faculty repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all faculties, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Faculty>> {
        sqlx::query_as::<_, Faculty>("SELECT * FROM faculties ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list faculties", e))
    }

    /// Find a faculty by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>("SELECT * FROM faculties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find faculty", e))
    }

    /// Whether another faculty already uses `name`.
    pub async fn name_taken(&self, name: &str, except_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM faculties WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check faculty name", e))
    }

    /// Insert a faculty.
    pub async fn create(&self, name: &str) -> AppResult<Faculty> {
        sqlx::query_as::<_, Faculty>("INSERT INTO faculties (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => AppError::with_source(
                    ErrorKind::Validation,
                    "The name has already been taken.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to create faculty", e),
            })
    }

    /// Rename a faculty. Returns `None` when it does not exist.
    pub async fn update(&self, id: i64, name: &str) -> AppResult<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>(
            "UPDATE faculties SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The name has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update faculty", e),
        })
    }

    /// Delete a faculty. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete faculty because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete faculty", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
