//! Application builder: wires repositories, services, router and
//! middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use unidesk_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use unidesk_core::config::AppConfig;
use unidesk_core::error::AppError;
use unidesk_database::repositories::{
    AcademicSessionRepository, DepartmentRepository, FacultyRepository, IssueRepository,
    NotificationRepository, ParentRepository, ProfileRepository, RosterRepository,
    SchoolRepository, SemesterRepository, SubjectRepository, UserRepository,
};
use unidesk_service::{
    AcademicService, AuthService, IssueService, NotificationService, ProfileService,
    RegistryService, RosterService,
};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Construct every repository and service on top of `db_pool`.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let profile_repo = Arc::new(ProfileRepository::new(db_pool.clone()));
    let faculty_repo = Arc::new(FacultyRepository::new(db_pool.clone()));
    let department_repo = Arc::new(DepartmentRepository::new(db_pool.clone()));
    let semester_repo = Arc::new(SemesterRepository::new(db_pool.clone()));
    let subject_repo = Arc::new(SubjectRepository::new(db_pool.clone()));
    let session_repo = Arc::new(AcademicSessionRepository::new(db_pool.clone()));
    let school_repo = Arc::new(SchoolRepository::new(db_pool.clone()));
    let parent_repo = Arc::new(ParentRepository::new(db_pool.clone()));
    let roster_repo = Arc::new(RosterRepository::new(db_pool.clone()));
    let issue_repo = Arc::new(IssueRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        hasher,
        encoder,
        decoder,
    ));
    let profile_service = Arc::new(ProfileService::new(user_repo, profile_repo));
    let academic_service = Arc::new(AcademicService::new(
        faculty_repo,
        department_repo,
        semester_repo,
        subject_repo,
        session_repo,
    ));
    let registry_service = Arc::new(RegistryService::new(school_repo, parent_repo));
    let roster_service = Arc::new(RosterService::new(roster_repo));
    let issue_service = Arc::new(IssueService::new(issue_repo, config.issues.clone()));
    let notification_service = Arc::new(NotificationService::new(notification_repo));

    AppState {
        config: Arc::new(config),
        db_pool,
        auth_service,
        profile_service,
        academic_service,
        registry_service,
        roster_service,
        issue_service,
        notification_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the UniDesk server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool);

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("UniDesk server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("UniDesk server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
