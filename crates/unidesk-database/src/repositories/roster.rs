//! Class roster repository: classes, memberships and leaders.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::roster::{
    ClassWithLeader, LeaderAssignment, MigrationOutcome, RosterStudent, StudentPlacement,
};

/// Repository for class membership and leadership.
#[derive(Debug, Clone)]
pub struct RosterRepository {
    pool: PgPool,
}

impl RosterRepository {
    /// Create a new roster repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every class with its leader, ordered by class id.
    pub async fn list_classes(&self) -> AppResult<Vec<ClassWithLeader>> {
        sqlx::query_as::<_, ClassWithLeader>(
            "SELECT c.id AS class_id, c.name AS class_name, c.department_id, \
                    s.id AS leader_student_id, s.name AS leader_name, s.student_code AS leader_code \
             FROM classes c \
             LEFT JOIN class_leaders l ON l.class_id = c.id \
             LEFT JOIN students s ON s.id = l.student_id \
             ORDER BY c.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list classes", e))
    }

    /// Every enrolled student with their class, ordered by student id.
    pub async fn list_placements(&self) -> AppResult<Vec<StudentPlacement>> {
        sqlx::query_as::<_, StudentPlacement>(
            "SELECT s.id AS student_id, s.student_code, s.name, sc.class_id \
             FROM students s JOIN student_classes sc ON sc.student_id = s.id \
             ORDER BY s.id, sc.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    /// Students enrolled in one class.
    pub async fn class_students(&self, class_id: i64) -> AppResult<Vec<RosterStudent>> {
        sqlx::query_as::<_, RosterStudent>(
            "SELECT s.id AS student_id, s.student_code, s.name \
             FROM students s JOIN student_classes sc ON sc.student_id = s.id \
             WHERE sc.class_id = $1 \
             ORDER BY s.id",
        )
        .bind(class_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list class students", e))
    }

    /// Whether a class with this id exists.
    pub async fn class_exists(&self, class_id: i64) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM classes WHERE id = $1)")
            .bind(class_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check class", e))
    }

    /// Whether a student with this id exists.
    pub async fn student_exists(&self, student_id: i64) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM students WHERE id = $1)")
            .bind(student_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check student", e))
    }

    /// Make `student_id` the leader of `class_id`, replacing any previous leader.
    pub async fn upsert_leader(&self, class_id: i64, student_id: i64) -> AppResult<LeaderAssignment> {
        sqlx::query_as::<_, LeaderAssignment>(
            "INSERT INTO class_leaders (class_id, student_id) VALUES ($1, $2) \
             ON CONFLICT (class_id) DO UPDATE SET student_id = EXCLUDED.student_id, updated_at = NOW() \
             RETURNING class_id, student_id",
        )
        .bind(class_id)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update class leader", e))
    }

    /// Move a student to another class and drop every leadership they held.
    ///
    /// Both writes commit together. The classes the student led are left
    /// without a leader.
    pub async fn migrate_student(&self, student_id: i64, new_class_id: i64) -> AppResult<MigrationOutcome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let moved = sqlx::query(
            "UPDATE student_classes SET class_id = $2, updated_at = NOW() WHERE student_id = $1",
        )
        .bind(student_id)
        .bind(new_class_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move student", e))?;

        let removed = sqlx::query("DELETE FROM class_leaders WHERE student_id = $1")
            .bind(student_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove leaderships", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit student migration", e)
        })?;

        Ok(MigrationOutcome {
            student_id,
            new_class_id,
            memberships_updated: moved.rows_affected(),
            leaderships_removed: removed.rows_affected(),
        })
    }
}
