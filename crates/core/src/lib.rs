//! Tributo Core - domain entities, services, and traits.
//!
//! This crate contains the business logic for the tax-data back office:
//! classifications, bulk spreadsheet ingestion, tax qualifications, user
//! registration, and role-based authorization. It is database-agnostic and
//! defines repository traits that are implemented by the `storage-sqlite`
//! crate. The hosting web layer constructs an [`auth::AuthContext`] per
//! request and calls into the services defined here.

pub mod auth;
pub mod classifications;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod qualifications;
pub mod tax_data;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
