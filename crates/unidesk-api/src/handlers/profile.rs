//! Profile handler.

use axum::Json;
use axum::extract::State;

use unidesk_core::error::AppError;
use unidesk_entity::user::Profile;

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let profile = state.profile_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}
