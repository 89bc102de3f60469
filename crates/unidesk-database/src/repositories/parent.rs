//! Parent repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::registry::Parent;

use crate::error::{Violation, violation};

/// Repository for parent CRUD operations.
#[derive(Debug, Clone)]
pub struct ParentRepository {
    pool: PgPool,
}

impl ParentRepository {
    /// Create a new parent repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all parents, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Parent>> {
        sqlx::query_as::<_, Parent>("SELECT * FROM parents ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list parents", e))
    }

    /// Insert a parent.
    pub async fn create(
        &self,
        name: &str,
        phone_primary: Option<&str>,
        phone_secondary: Option<&str>,
    ) -> AppResult<Parent> {
        sqlx::query_as::<_, Parent>(
            "INSERT INTO parents (name, phone_primary, phone_secondary) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(name)
        .bind(phone_primary)
        .bind(phone_secondary)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create parent", e))
    }

    /// Update a parent. Returns `None` when it does not exist.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        phone_primary: Option<&str>,
        phone_secondary: Option<&str>,
    ) -> AppResult<Option<Parent>> {
        sqlx::query_as::<_, Parent>(
            "UPDATE parents SET name = $2, phone_primary = $3, phone_secondary = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(phone_primary)
        .bind(phone_secondary)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update parent", e))
    }

    /// Delete a parent. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM parents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete parent because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete parent", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
