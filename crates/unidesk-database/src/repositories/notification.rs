//! Notification repository implementation.

use sqlx::{PgConnection, PgPool};

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::notification::{Notification, NotificationDraft};

/// Repository for reading and acknowledging notifications.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active notifications of a user, unread first, newest first within each group.
    pub async fn find_for_receiver(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE receiver_user_id = $1 AND status = 'Active' \
             ORDER BY is_read ASC, created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Mark a notification read on behalf of its receiver.
    ///
    /// Returns `None` when no notification with this id belongs to `user_id`.
    /// The first read time is kept on repeated calls.
    pub async fn mark_read(&self, id: i64, user_id: i64) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications \
             SET is_read = TRUE, read_at = COALESCE(read_at, NOW()), updated_at = NOW() \
             WHERE id = $1 AND receiver_user_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e))
    }
}

/// Store a notification using an open connection or transaction.
pub(crate) async fn insert_notification(
    conn: &mut PgConnection,
    receiver_user_id: i64,
    draft: &NotificationDraft,
) -> AppResult<i64> {
    sqlx::query_scalar(
        "INSERT INTO notifications (receiver_user_id, title, message, module, record_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(receiver_user_id)
    .bind(&draft.title)
    .bind(&draft.message)
    .bind(&draft.module)
    .bind(draft.record_id)
    .fetch_one(conn)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
}
