//! # unidesk-service
//!
//! Use cases of the UniDesk portal. Each service orchestrates repositories
//! and credential helpers; the HTTP layer and the CLI only call into here.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod academic;
pub mod auth;
pub mod context;
pub mod issue;
pub mod notification;
pub mod profile;
pub mod registry;
pub mod roster;
pub mod user;

pub use academic::AcademicService;
pub use auth::{AuthService, LoginResult};
pub use context::RequestContext;
pub use issue::{IssueService, plan_backlog};
pub use notification::NotificationService;
pub use profile::ProfileService;
pub use registry::RegistryService;
pub use roster::RosterService;
pub use user::AdminUserService;
pub use user::admin::CreateUserRequest;

/// Trim a required text field, rejecting blank input.
pub(crate) fn required(value: &str, field: &str) -> unidesk_core::AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(unidesk_core::AppError::validation(format!(
            "The {field} field is required."
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank input counts as absent.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
