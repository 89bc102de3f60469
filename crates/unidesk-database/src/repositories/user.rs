//! User account repository implementation.

use sqlx::PgPool;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::user::{AccessChannel, LoginRecord, UserAccount};

use crate::error::{Violation, violation};

const ACCOUNT_COLUMNS: &str = "u.id, u.role_id, r.name AS role_name, u.username, u.full_name, \
                               u.status, u.access_channel, u.created_at";

/// Repository for user accounts and their roles.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load what the login flow needs for `username` (exact match).
    pub async fn find_login_record(&self, username: &str) -> AppResult<Option<LoginRecord>> {
        sqlx::query_as::<_, LoginRecord>(
            "SELECT u.id, u.username, u.password_hash, r.name AS role_name, \
                    COALESCE(t.name, u.username) AS display_name, u.status, u.access_channel \
             FROM users u \
             JOIN roles r ON r.id = u.role_id \
             LEFT JOIN teachers t ON t.user_id = u.id \
             WHERE u.username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load login record", e))
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<UserAccount>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id WHERE u.id = $1"
        );
        sqlx::query_as::<_, UserAccount>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// List all accounts ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<UserAccount>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id ORDER BY u.id"
        );
        sqlx::query_as::<_, UserAccount>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Create an account under the role called `role_name`.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role_name: &str,
        full_name: Option<&str>,
        access_channel: AccessChannel,
    ) -> AppResult<UserAccount> {
        let id: Option<i64> = sqlx::query_scalar(
            "INSERT INTO users (role_id, username, password_hash, full_name, access_channel) \
             SELECT r.id, $2, $3, $4, $5 FROM roles r WHERE r.name = $1 \
             RETURNING id",
        )
        .bind(role_name)
        .bind(username)
        .bind(password_hash)
        .bind(full_name)
        .bind(access_channel)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::with_source(
                ErrorKind::Validation,
                "The username has already been taken.",
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        let id = id.ok_or_else(|| AppError::validation(format!("Unknown role '{role_name}'")))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("Created user could not be read back"))
    }

    /// Replace the stored password hash.
    pub async fn update_password_hash(&self, id: i64, password_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password hash", e)
            })?;
        Ok(())
    }
}
