//! Error types for the storage layer.

use employee_core::EmployeeId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// No employee with this identifier.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// True when the error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EmployeeNotFound(_))
    }
}
