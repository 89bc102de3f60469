//! Health check handler.

use axum::Json;
use axum::extract::State;

use unidesk_core::error::AppError;
use unidesk_database::connection::health_check;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    health_check(&state.db_pool).await?;

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })))
}
