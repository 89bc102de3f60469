//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

use unidesk_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the API extractor and passed into service methods so that
/// every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's id.
    pub user_id: i64,
    /// The username.
    pub username: String,
    /// The role, resolved from `role_name`.
    pub role: UserRole,
    /// Role name as stored in the database.
    pub role_name: String,
}

impl RequestContext {
    /// Creates a new request context, resolving the role from its stored name.
    pub fn new(user_id: i64, username: impl Into<String>, role_name: impl Into<String>) -> Self {
        let role_name = role_name.into();
        Self {
            user_id,
            username: username.into(),
            role: UserRole::from_name(&role_name),
            role_name,
        }
    }

    /// Returns whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the acting user is `user_id` or an administrator.
    pub fn is_self_or_admin(&self, user_id: i64) -> bool {
        self.user_id == user_id || self.is_admin()
    }
}
