//! `AuthUser` extractor: resolves the caller from the bearer token.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use unidesk_core::error::AppError;
use unidesk_service::context::RequestContext;

use crate::state::AppState;

/// Header carrying a bare user id, accepted only when
/// `auth.legacy_identity_header` is enabled.
pub const LEGACY_IDENTITY_HEADER: &str = "x-user-id";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(header) = parts.headers.get(AUTHORIZATION) {
            let token = header
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

            return state.auth_service.authenticate(token).map(AuthUser);
        }

        if state.config.auth.legacy_identity_header {
            if let Some(header) = parts.headers.get(LEGACY_IDENTITY_HEADER) {
                let user_id = header
                    .to_str()
                    .ok()
                    .and_then(|v| v.trim().parse::<i64>().ok())
                    .ok_or_else(|| AppError::unauthorized("Invalid X-USER-ID header"))?;

                return state
                    .auth_service
                    .authenticate_user_id(user_id)
                    .await
                    .map(AuthUser);
            }
        }

        Err(AppError::unauthorized("Missing Authorization header"))
    }
}
