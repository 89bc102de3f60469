//! Account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_status")]
pub enum AccountStatus {
    /// Account can sign in.
    Active,
    /// Account is disabled.
    Inactive,
}

impl AccountStatus {
    /// Return the status as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
