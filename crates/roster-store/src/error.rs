use roster_types::StudentId;

use crate::validation::Violations;

/// Errors from student store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No student has the requested id.
    #[error("student not found: {0}")]
    NotFound(StudentId),

    /// One or more field constraints were violated.
    #[error("validation failed: {0}")]
    Validation(Violations),

    /// Another student already uses this email (case-insensitive).
    #[error("email already exists: {email}")]
    Conflict { email: String },

    /// A call argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
