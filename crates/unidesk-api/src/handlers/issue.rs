//! Classroom issue handlers.

use axum::Json;
use axum::extract::{Query, State};

use unidesk_core::error::AppError;
use unidesk_entity::issue::{IssueDetail, IssueStats, IssueSummary, TransitionOutcome};

use crate::dto::request::{IssueListQuery, UpdateIssueStatusRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::middleware::rbac::require_issue_staff;
use crate::state::AppState;

/// GET /api/faculty/issues
pub async fn list_issues(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<IssueListQuery>,
) -> Result<Json<ApiResponse<Vec<IssueSummary>>>, AppError> {
    require_issue_staff(&auth)?;
    let filter = query.into_filter()?;
    let issues = state
        .issue_service
        .list(filter)
        .await
        .map_err(|e| e.into_internal("Failed to fetch issues"))?;
    Ok(Json(ApiResponse::ok(issues)))
}

/// GET /api/faculty/issues/stats
pub async fn issue_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<IssueStats>>, AppError> {
    require_issue_staff(&auth)?;
    let stats = state
        .issue_service
        .stats()
        .await
        .map_err(|e| e.into_internal("Failed to fetch issue stats"))?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/faculty/issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<IssueDetail>>, AppError> {
    require_issue_staff(&auth)?;
    let detail = state
        .issue_service
        .detail(id)
        .await
        .map_err(|e| e.into_internal("Failed to fetch issue"))?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// PUT /api/faculty/issues/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateIssueStatusRequest>,
) -> Result<Json<ApiResponse<TransitionOutcome>>, AppError> {
    require_issue_staff(&auth)?;
    let outcome = state
        .issue_service
        .transition(&auth, id, req.new_status, req.note.as_deref(), req.user_id)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Issue status updated successfully",
        outcome,
    )))
}
