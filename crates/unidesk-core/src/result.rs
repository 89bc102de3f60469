//! Convenience result type alias for UniDesk.

use crate::error::AppError;

/// A specialized `Result` type for UniDesk operations.
pub type AppResult<T> = Result<T, AppError>;
