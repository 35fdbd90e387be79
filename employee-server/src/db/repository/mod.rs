//! Repository Module
//!
//! Keyed-store access to the SQLite tables. Each table has a trait (the seam
//! the service depends on) and a `sqlx` implementation.

pub mod department;
pub mod employee;

// Re-exports
pub use department::{DepartmentLookup, SqliteDepartmentRepository};
pub use employee::{EmployeeRepository, SqliteEmployeeRepository};

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Row rejected by a CHECK / NOT NULL / UNIQUE / FOREIGN KEY constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Update of an id that matches no row
    #[error("Row {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation => {
                    return RepoError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
