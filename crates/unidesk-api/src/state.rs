//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use unidesk_core::config::AppConfig;
use unidesk_service::{
    AcademicService, AuthService, IssueService, NotificationService, ProfileService,
    RegistryService, RosterService,
};

/// Shared application state passed to every handler via `State`.
///
/// Everything is behind `Arc`, so cloning per request is cheap and handlers
/// share no mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used directly only by the health check.
    pub db_pool: PgPool,

    pub auth_service: Arc<AuthService>,
    pub profile_service: Arc<ProfileService>,
    pub academic_service: Arc<AcademicService>,
    pub registry_service: Arc<RegistryService>,
    pub roster_service: Arc<RosterService>,
    pub issue_service: Arc<IssueService>,
    pub notification_service: Arc<NotificationService>,
}
