use thiserror::Error;

/// Error for SimpleName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimpleNameError {
    #[error("Name is required")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for simple resource operations
#[derive(Debug, Clone, Error)]
pub enum SimpleError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] SimpleNameError),

    #[error("Simple not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
