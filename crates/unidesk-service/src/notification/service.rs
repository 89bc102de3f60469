//! Notification feed and read receipts.

use std::sync::Arc;

use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::NotificationRepository;
use unidesk_entity::notification::Notification;

use crate::context::RequestContext;

/// Reads and acknowledges notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Feed of `user_id`, unread first. Users read their own feed; admins read any.
    pub async fn list_for(&self, ctx: &RequestContext, user_id: i64) -> AppResult<Vec<Notification>> {
        if !ctx.is_self_or_admin(user_id) {
            return Err(AppError::forbidden("You can only view your own notifications"));
        }
        self.notification_repo.find_for_receiver(user_id).await
    }

    /// Mark one of the caller's notifications read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: i64) -> AppResult<Notification> {
        self.notification_repo
            .mark_read(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }
}
