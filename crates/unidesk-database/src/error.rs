//! Classification of constraint violations reported by PostgreSQL.

/// A constraint violation the API reports as a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A unique constraint or index rejected the row.
    Unique,
    /// A foreign key rejected the row, or the row is still referenced.
    ForeignKey,
}

/// Return the violation behind a failed query, if any.
pub fn violation(err: &sqlx::Error) -> Option<Violation> {
    let db_err = err.as_database_error()?;
    if db_err.is_unique_violation() {
        Some(Violation::Unique)
    } else if db_err.is_foreign_key_violation() {
        Some(Violation::ForeignKey)
    } else {
        None
    }
}
