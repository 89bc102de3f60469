//! Student registry handlers: schools and parents.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use unidesk_core::error::AppError;
use unidesk_entity::registry::{Parent, School};

use crate::dto::request::{ParentRequest, SchoolRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::middleware::rbac::require_registry_admin;
use crate::state::AppState;

/// GET /api/student-management/schools
pub async fn list_schools(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<School>>>, AppError> {
    require_registry_admin(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.registry_service.list_schools().await?,
    )))
}

/// POST /api/student-management/schools
pub async fn create_school(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SchoolRequest>,
) -> Result<(StatusCode, Json<ApiResponse<School>>), AppError> {
    require_registry_admin(&auth)?;
    let school = state
        .registry_service
        .create_school(&auth, &req.name, req.address.as_deref())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("School created successfully", school)),
    ))
}

/// PUT /api/student-management/schools/{id}
pub async fn update_school(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<SchoolRequest>,
) -> Result<Json<ApiResponse<School>>, AppError> {
    require_registry_admin(&auth)?;
    let school = state
        .registry_service
        .update_school(&auth, id, &req.name, req.address.as_deref())
        .await?;
    Ok(Json(ApiResponse::with_message(
        "School updated successfully",
        school,
    )))
}

/// DELETE /api/student-management/schools/{id}
pub async fn delete_school(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_registry_admin(&auth)?;
    state.registry_service.delete_school(&auth, id).await?;
    Ok(Json(ApiResponse::message("School deleted successfully")))
}

/// GET /api/student-management/parents
pub async fn list_parents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Parent>>>, AppError> {
    require_registry_admin(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.registry_service.list_parents().await?,
    )))
}

/// POST /api/student-management/parents
pub async fn create_parent(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ParentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Parent>>), AppError> {
    require_registry_admin(&auth)?;
    let parent = state
        .registry_service
        .create_parent(
            &auth,
            &req.name,
            req.phone_primary.as_deref(),
            req.phone_secondary.as_deref(),
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Parent created successfully", parent)),
    ))
}

/// PUT /api/student-management/parents/{id}
pub async fn update_parent(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<ParentRequest>,
) -> Result<Json<ApiResponse<Parent>>, AppError> {
    require_registry_admin(&auth)?;
    let parent = state
        .registry_service
        .update_parent(
            &auth,
            id,
            &req.name,
            req.phone_primary.as_deref(),
            req.phone_secondary.as_deref(),
        )
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Parent updated successfully",
        parent,
    )))
}

/// DELETE /api/student-management/parents/{id}
pub async fn delete_parent(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_registry_admin(&auth)?;
    state.registry_service.delete_parent(&auth, id).await?;
    Ok(Json(ApiResponse::message("Parent deleted successfully")))
}
