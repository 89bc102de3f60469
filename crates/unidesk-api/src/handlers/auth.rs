//! Login handler.

use axum::Json;
use axum::extract::State;

use unidesk_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let result = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Login successful",
        LoginResponse {
            user: result.user,
            token: result.token.token,
            token_type: "Bearer",
            expires_at: result.token.expires_at,
        },
    )))
}
