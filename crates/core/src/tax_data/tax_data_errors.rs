use thiserror::Error;

/// Custom error type for tax-data operations.
#[derive(Debug, Error)]
pub enum TaxDataError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
