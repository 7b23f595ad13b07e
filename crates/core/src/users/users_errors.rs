use thiserror::Error;

/// Custom error type for user and registration operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("The email '{0}' is already registered")]
    DuplicateEmail(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must be at least {0} years old to register")]
    Underage(i32),
}
