/// Maximum accepted upload size for bulk ingestion files (10 MB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default page size for tax-data listings.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Page size for qualification listings.
pub const QUALIFICATION_PAGE_SIZE: i64 = 15;
