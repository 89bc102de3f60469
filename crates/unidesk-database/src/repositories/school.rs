//! School repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::registry::School;

use crate::error::{Violation, violation};

/// Repository for school CRUD operations.
#[derive(Debug, Clone)]
pub struct SchoolRepository {
    pool: PgPool,
}

impl SchoolRepository {
    /// Create a new school repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all schools, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<School>> {
        sqlx::query_as::<_, School>("SELECT * FROM schools ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list schools", e))
    }

    /// Whether another school already uses `name`.
    pub async fn name_taken(&self, name: &str, except_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM schools WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check school name", e))
    }

    /// Insert a school.
    pub async fn create(&self, name: &str, address: Option<&str>) -> AppResult<School> {
        sqlx::query_as::<_, School>(
            "INSERT INTO schools (name, address) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The name has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create school", e),
        })
    }

    /// Update a school. Returns `None` when it does not exist.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        address: Option<&str>,
    ) -> AppResult<Option<School>> {
        sqlx::query_as::<_, School>(
            "UPDATE schools SET name = $2, address = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The name has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update school", e),
        })
    }

    /// Delete a school. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete school because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete school", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
