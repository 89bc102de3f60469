//! Class roster handlers.

use axum::Json;
use axum::extract::State;

use unidesk_core::error::AppError;
use unidesk_entity::roster::{
    ClassWithLeader, LeaderAssignment, MigrationOutcome, RosterStudent, StudentPlacement,
};

use crate::dto::request::{ChangeLeaderRequest, MigrateStudentRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::middleware::rbac::require_issue_staff;
use crate::state::AppState;

/// GET /api/faculty/classes
pub async fn list_classes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ClassWithLeader>>>, AppError> {
    require_issue_staff(&auth)?;
    let classes = state.roster_service.list_classes().await?;
    Ok(Json(ApiResponse::ok(classes)))
}

/// GET /api/faculty/students
pub async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<StudentPlacement>>>, AppError> {
    require_issue_staff(&auth)?;
    let students = state.roster_service.list_students().await?;
    Ok(Json(ApiResponse::ok(students)))
}

/// GET /api/faculty/classes/{id}/students
pub async fn class_students(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(class_id): IdPath,
) -> Result<Json<ApiResponse<Vec<RosterStudent>>>, AppError> {
    require_issue_staff(&auth)?;
    let students = state.roster_service.class_students(class_id).await?;
    Ok(Json(ApiResponse::ok(students)))
}

/// PUT /api/faculty/classes/{id}/leader
pub async fn change_leader(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(class_id): IdPath,
    ValidatedJson(req): ValidatedJson<ChangeLeaderRequest>,
) -> Result<Json<ApiResponse<LeaderAssignment>>, AppError> {
    require_issue_staff(&auth)?;
    let assignment = state
        .roster_service
        .change_leader(&auth, class_id, req.student_id)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Class leader updated successfully",
        assignment,
    )))
}

/// POST /api/faculty/students/migrate
pub async fn migrate_student(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<MigrateStudentRequest>,
) -> Result<Json<ApiResponse<MigrationOutcome>>, AppError> {
    require_issue_staff(&auth)?;
    let outcome = state
        .roster_service
        .migrate_student(&auth, req.student_id, req.new_class_id)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Student migrated successfully",
        outcome,
    )))
}
