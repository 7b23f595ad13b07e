//! SQLite storage implementation for the tax-data administration core.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `tributo-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the workspace where Diesel dependencies exist;
//! `core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod classifications;
pub mod profiles;
pub mod qualifications;
pub mod tax_data;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{DieselErrorExt, IntoCore, StorageError};

// Re-export from tributo-core for convenience
pub use tributo_core::errors::{DatabaseError, Error, Result};
