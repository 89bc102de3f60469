//! Academic structure handlers: faculties, departments, semesters,
//! subjects and academic sessions.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use unidesk_core::error::AppError;
use unidesk_entity::academic::{AcademicSession, Department, Faculty, Semester, Subject};

use crate::dto::request::{
    AcademicSessionRequest, DepartmentRequest, FacultyRequest, SemesterRequest, SubjectRequest,
};
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::middleware::rbac::require_academic_staff;
use crate::state::AppState;

type Created<T> = (StatusCode, Json<ApiResponse<T>>);

fn created<T: serde::Serialize>(message: &str, data: T) -> Created<T> {
    (
        StatusCode::CREATED,
        Json(ApiResponse::with_message(message, data)),
    )
}

// ── Faculties ──────────────────────────────────────────────────────

/// GET /api/academic-structure/faculties
pub async fn list_faculties(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Faculty>>>, AppError> {
    require_academic_staff(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.academic_service.list_faculties().await?,
    )))
}

/// POST /api/academic-structure/faculties
pub async fn create_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FacultyRequest>,
) -> Result<Created<Faculty>, AppError> {
    require_academic_staff(&auth)?;
    let faculty = state.academic_service.create_faculty(&auth, &req.name).await?;
    Ok(created("Faculty created successfully", faculty))
}

/// PUT /api/academic-structure/faculties/{id}
pub async fn update_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<FacultyRequest>,
) -> Result<Json<ApiResponse<Faculty>>, AppError> {
    require_academic_staff(&auth)?;
    let faculty = state
        .academic_service
        .update_faculty(&auth, id, &req.name)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Faculty updated successfully",
        faculty,
    )))
}

/// DELETE /api/academic-structure/faculties/{id}
pub async fn delete_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_academic_staff(&auth)?;
    state.academic_service.delete_faculty(&auth, id).await?;
    Ok(Json(ApiResponse::message("Faculty deleted successfully")))
}

// ── Departments ────────────────────────────────────────────────────

/// GET /api/academic-structure/departments
pub async fn list_departments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Department>>>, AppError> {
    require_academic_staff(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.academic_service.list_departments().await?,
    )))
}

/// POST /api/academic-structure/departments
pub async fn create_department(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<DepartmentRequest>,
) -> Result<Created<Department>, AppError> {
    require_academic_staff(&auth)?;
    let department = state
        .academic_service
        .create_department(&auth, &req.name, req.faculty_id)
        .await?;
    Ok(created("Department created successfully", department))
}

/// PUT /api/academic-structure/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<DepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, AppError> {
    require_academic_staff(&auth)?;
    let department = state
        .academic_service
        .update_department(&auth, id, &req.name, req.faculty_id)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Department updated successfully",
        department,
    )))
}

/// DELETE /api/academic-structure/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_academic_staff(&auth)?;
    state.academic_service.delete_department(&auth, id).await?;
    Ok(Json(ApiResponse::message("Department deleted successfully")))
}

// ── Semesters ──────────────────────────────────────────────────────

/// GET /api/academic-structure/semesters
pub async fn list_semesters(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Semester>>>, AppError> {
    require_academic_staff(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.academic_service.list_semesters().await?,
    )))
}

/// POST /api/academic-structure/semesters
pub async fn create_semester(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SemesterRequest>,
) -> Result<Created<Semester>, AppError> {
    require_academic_staff(&auth)?;
    let semester = state.academic_service.create_semester(&auth, &req.name).await?;
    Ok(created("Semester created successfully", semester))
}

/// PUT /api/academic-structure/semesters/{id}
pub async fn update_semester(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<SemesterRequest>,
) -> Result<Json<ApiResponse<Semester>>, AppError> {
    require_academic_staff(&auth)?;
    let semester = state
        .academic_service
        .update_semester(&auth, id, &req.name)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Semester updated successfully",
        semester,
    )))
}

/// DELETE /api/academic-structure/semesters/{id}
pub async fn delete_semester(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_academic_staff(&auth)?;
    state.academic_service.delete_semester(&auth, id).await?;
    Ok(Json(ApiResponse::message("Semester deleted successfully")))
}

// ── Subjects ───────────────────────────────────────────────────────

/// GET /api/academic-structure/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Subject>>>, AppError> {
    require_academic_staff(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.academic_service.list_subjects().await?,
    )))
}

/// POST /api/academic-structure/subjects
pub async fn create_subject(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SubjectRequest>,
) -> Result<Created<Subject>, AppError> {
    require_academic_staff(&auth)?;
    let subject = state
        .academic_service
        .create_subject(&auth, &req.name, &req.code)
        .await?;
    Ok(created("Subject created successfully", subject))
}

/// PUT /api/academic-structure/subjects/{id}
pub async fn update_subject(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<SubjectRequest>,
) -> Result<Json<ApiResponse<Subject>>, AppError> {
    require_academic_staff(&auth)?;
    let subject = state
        .academic_service
        .update_subject(&auth, id, &req.name, &req.code)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Subject updated successfully",
        subject,
    )))
}

/// DELETE /api/academic-structure/subjects/{id}
pub async fn delete_subject(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_academic_staff(&auth)?;
    state.academic_service.delete_subject(&auth, id).await?;
    Ok(Json(ApiResponse::message("Subject deleted successfully")))
}

// ── Academic sessions ──────────────────────────────────────────────

/// GET /api/academic-structure/academics
pub async fn list_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<AcademicSession>>>, AppError> {
    require_academic_staff(&auth)?;
    Ok(Json(ApiResponse::ok(
        state.academic_service.list_sessions().await?,
    )))
}

/// POST /api/academic-structure/academics
pub async fn create_session(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AcademicSessionRequest>,
) -> Result<Created<AcademicSession>, AppError> {
    require_academic_staff(&auth)?;
    let session = state
        .academic_service
        .create_session(&auth, req.start_date, req.end_date, &req.active_year)
        .await?;
    Ok(created("Academic session created successfully", session))
}

/// PUT /api/academic-structure/academics/{id}
pub async fn update_session(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<AcademicSessionRequest>,
) -> Result<Json<ApiResponse<AcademicSession>>, AppError> {
    require_academic_staff(&auth)?;
    let session = state
        .academic_service
        .update_session(&auth, id, req.start_date, req.end_date, &req.active_year)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Academic session updated successfully",
        session,
    )))
}

/// DELETE /api/academic-structure/academics/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_academic_staff(&auth)?;
    state.academic_service.delete_session(&auth, id).await?;
    Ok(Json(ApiResponse::message("Academic session deleted successfully")))
}
