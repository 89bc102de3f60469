//! Notification handlers.

use axum::Json;
use axum::extract::State;

use unidesk_core::error::AppError;
use unidesk_entity::notification::Notification;

use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, IdPath};
use crate::state::AppState;

/// GET /api/faculty/notifications/{id}
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> Result<Json<ApiResponse<Vec<Notification>>>, AppError> {
    let notifications = state.notification_service.list_for(&auth, user_id).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// PUT /api/faculty/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let notification = state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Notification marked as read",
        notification,
    )))
}
