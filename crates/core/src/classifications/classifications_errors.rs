use thiserror::Error;

/// Custom error type for classification-related operations.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("A classification named '{0}' already exists")]
    DuplicateName(String),
}
