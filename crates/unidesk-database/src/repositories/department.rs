//! Department repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::academic::Department;

use crate::error::{Violation, violation};

/// Repository for department CRUD operations.
///
/// Every read joins the owning faculty so rows carry `faculty_name`.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all departments, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Department>> {
        sqlx::query_as::<_, Department>(
            "SELECT d.id, d.name, d.faculty_id, f.name AS faculty_name, d.created_at, d.updated_at \
             FROM departments d JOIN faculties f ON f.id = d.faculty_id \
             ORDER BY d.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list departments", e))
    }

    /// Whether another department already uses `name`.
    pub async fn name_taken(&self, name: &str, except_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM departments WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check department name", e)
        })
    }

    /// Insert a department and return it with its faculty name.
    pub async fn create(&self, name: &str, faculty_id: i64) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "WITH inserted AS ( \
                 INSERT INTO departments (name, faculty_id) VALUES ($1, $2) RETURNING * \
             ) \
             SELECT i.id, i.name, i.faculty_id, f.name AS faculty_name, i.created_at, i.updated_at \
             FROM inserted i JOIN faculties f ON f.id = i.faculty_id",
        )
        .bind(name)
        .bind(faculty_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to create department"))
    }

    /// Update a department. Returns `None` when it does not exist.
    pub async fn update(&self, id: i64, name: &str, faculty_id: i64) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>(
            "WITH updated AS ( \
                 UPDATE departments SET name = $2, faculty_id = $3, updated_at = NOW() \
                 WHERE id = $1 RETURNING * \
             ) \
             SELECT u.id, u.name, u.faculty_id, f.name AS faculty_name, u.created_at, u.updated_at \
             FROM updated u JOIN faculties f ON f.id = u.faculty_id",
        )
        .bind(id)
        .bind(name)
        .bind(faculty_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to update department"))
    }

    /// Delete a department. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => AppError::with_source(
                    ErrorKind::Conflict,
                    "Cannot delete department because it is linked to other records.",
                    e,
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete department", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}

fn write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match violation(&e) {
        Some(Violation::Unique) => AppError::with_source(
            ErrorKind::Validation,
            "The name has already been taken.",
            e,
        ),
        Some(Violation::ForeignKey) => AppError::with_source(
            ErrorKind::Validation,
            "The selected faculty is invalid.",
            e,
        ),
        None => AppError::with_source(ErrorKind::Database, context, e),
    }
}
