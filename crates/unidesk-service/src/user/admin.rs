//! Account provisioning used by the operator CLI.

use std::sync::Arc;

use tracing::info;

use unidesk_auth::password::PasswordHasher;
use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::UserRepository;
use unidesk_entity::user::{AccessChannel, UserAccount, UserRole};

use crate::required;

/// Minimum length of a password set by an operator.
const MIN_PASSWORD_LEN: usize = 8;

/// Creates and lists portal accounts.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
}

/// Request to create a new account.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    /// Role name; case, spaces, `_` and `-` are ignored.
    pub role_name: String,
    pub full_name: Option<String>,
    pub access_channel: AccessChannel,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Lists all accounts ordered by id.
    pub async fn list_users(&self) -> AppResult<Vec<UserAccount>> {
        self.user_repo.find_all().await
    }

    /// Create an account with an Argon2id password hash.
    pub async fn create_user(&self, req: CreateUserRequest) -> AppResult<UserAccount> {
        let username = required(&req.username, "username")?;
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "The password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }
        let role = UserRole::from_name(&req.role_name);
        if role == UserRole::Unknown {
            return Err(AppError::validation(format!(
                "Unknown role: {}",
                req.role_name
            )));
        }

        let hash = self.hasher.hash_password(&req.password)?;
        let account = self
            .user_repo
            .create(
                &username,
                &hash,
                role.as_str(),
                crate::optional(req.full_name.as_deref()).as_deref(),
                req.access_channel,
            )
            .await?;

        info!(
            user_id = account.id,
            username = %account.username,
            role = %account.role_name,
            "User created"
        );
        Ok(account)
    }
}
