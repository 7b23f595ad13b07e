use thiserror::Error;

/// Custom error type for qualification-related operations.
#[derive(Debug, Error)]
pub enum QualificationError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("A qualification with event sequence '{0}' already exists")]
    DuplicateSequence(String),
}
