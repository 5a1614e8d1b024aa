use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid grade {0:?}: expected one of A, B, C, D, F")]
    InvalidGrade(String),

    #[error("invalid student id: {0:?}")]
    InvalidId(String),
}
