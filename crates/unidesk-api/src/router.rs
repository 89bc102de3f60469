//! Route definitions for the UniDesk HTTP API.
//!
//! Every route is mounted under `/api` and receives `AppState` through
//! Axum's `State` extractor. Sibling routes share parameter names because
//! the matcher rejects differently named captures at the same position.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes, the body limit and request logging.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(roster_routes())
        .merge(issue_routes())
        .merge(notification_routes())
        .merge(academic_routes())
        .merge(registry_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Login and the caller's own profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/profile/me", get(handlers::profile::me))
}

/// Classes, students, leaders and migrations
fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/faculty/classes", get(handlers::roster::list_classes))
        .route(
            "/faculty/classes/{id}/students",
            get(handlers::roster::class_students),
        )
        .route(
            "/faculty/classes/{id}/leader",
            put(handlers::roster::change_leader),
        )
        .route("/faculty/students", get(handlers::roster::list_students))
        .route(
            "/faculty/students/migrate",
            post(handlers::roster::migrate_student),
        )
}

/// Class issue lifecycle
fn issue_routes() -> Router<AppState> {
    Router::new()
        .route("/faculty/issues", get(handlers::issue::list_issues))
        .route("/faculty/issues/stats", get(handlers::issue::issue_stats))
        .route("/faculty/issues/{id}", get(handlers::issue::get_issue))
        .route(
            "/faculty/issues/{id}/status",
            put(handlers::issue::update_status),
        )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/faculty/notifications/{id}",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/faculty/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Faculties, departments, semesters, subjects and academic sessions
fn academic_routes() -> Router<AppState> {
    use handlers::academic::*;

    Router::new()
        .route(
            "/academic-structure/faculties",
            get(list_faculties).post(create_faculty),
        )
        .route(
            "/academic-structure/faculties/{id}",
            put(update_faculty).delete(delete_faculty),
        )
        .route(
            "/academic-structure/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/academic-structure/departments/{id}",
            put(update_department).delete(delete_department),
        )
        .route(
            "/academic-structure/semesters",
            get(list_semesters).post(create_semester),
        )
        .route(
            "/academic-structure/semesters/{id}",
            put(update_semester).delete(delete_semester),
        )
        .route(
            "/academic-structure/subjects",
            get(list_subjects).post(create_subject),
        )
        .route(
            "/academic-structure/subjects/{id}",
            put(update_subject).delete(delete_subject),
        )
        .route(
            "/academic-structure/academics",
            get(list_sessions).post(create_session),
        )
        .route(
            "/academic-structure/academics/{id}",
            put(update_session).delete(delete_session),
        )
}

/// Schools and parents, admins only
fn registry_routes() -> Router<AppState> {
    use handlers::registry::*;

    Router::new()
        .route(
            "/student-management/schools",
            get(list_schools).post(create_school),
        )
        .route(
            "/student-management/schools/{id}",
            put(update_school).delete(delete_school),
        )
        .route(
            "/student-management/parents",
            get(list_parents).post(create_parent),
        )
        .route(
            "/student-management/parents/{id}",
            put(update_parent).delete(delete_parent),
        )
}
