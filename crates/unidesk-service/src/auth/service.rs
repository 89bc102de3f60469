//! Login and request identity.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use unidesk_auth::jwt::{IssuedToken, JwtDecoder, JwtEncoder};
use unidesk_auth::password::PasswordHasher;
use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::UserRepository;
use unidesk_entity::user::{AccountStatus, LoginUser};

use crate::context::RequestContext;

/// Outcome of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub user: LoginUser,
    pub token: IssuedToken,
}

/// Checks credentials, issues bearer tokens and turns them back into a
/// [`RequestContext`].
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Sign a user in through the web portal.
    ///
    /// Checks, in order: the account exists, the password matches, the
    /// account is active, and the account may use the web channel.
    /// Legacy SHA-256 hashes are replaced with Argon2id on success.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResult> {
        let username = username.trim();

        let Some(record) = self.user_repo.find_login_record(username).await? else {
            info!(username, "Login rejected: unknown user");
            return Err(AppError::not_found("User not found"));
        };

        if !self.hasher.verify_password(password, &record.password_hash)? {
            info!(user_id = record.id, "Login rejected: invalid password");
            return Err(AppError::unauthorized("Invalid password"));
        }

        if record.status == AccountStatus::Inactive {
            info!(user_id = record.id, "Login rejected: account inactive");
            return Err(AppError::forbidden("Account inactive"));
        }

        if !record.access_channel.allows_web() {
            info!(user_id = record.id, "Login rejected: app-only account");
            return Err(AppError::forbidden("This account is APP only"));
        }

        if self.hasher.is_legacy(&record.password_hash) {
            self.upgrade_hash(record.id, password).await;
        }

        let token = self
            .encoder
            .issue(record.id, &record.username, &record.role_name)?;

        info!(user_id = record.id, role = %record.role_name, "Login successful");
        Ok(LoginResult {
            user: LoginUser::from(record),
            token,
        })
    }

    async fn upgrade_hash(&self, user_id: i64, password: &str) {
        let result = match self.hasher.hash_password(password) {
            Ok(hash) => self.user_repo.update_password_hash(user_id, &hash).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => info!(user_id, "Upgraded legacy password hash"),
            Err(e) => warn!(user_id, error = %e, "Failed to upgrade legacy password hash"),
        }
    }

    /// Resolve a bearer token into the acting user.
    pub fn authenticate(&self, token: &str) -> AppResult<RequestContext> {
        let claims = self.decoder.decode(token)?;
        Ok(RequestContext::new(claims.sub, claims.username, claims.role))
    }

    /// Resolve a user id sent in the `X-USER-ID` header.
    ///
    /// The account must exist and be active.
    pub async fn authenticate_user_id(&self, user_id: i64) -> AppResult<RequestContext> {
        let account = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(|account| account.status == AccountStatus::Active)
            .ok_or_else(|| AppError::unauthorized("Unknown or inactive user"))?;

        Ok(RequestContext::new(
            account.id,
            account.username,
            account.role_name,
        ))
    }
}
