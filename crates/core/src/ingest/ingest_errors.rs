use thiserror::Error;

/// File-level ingestion failures.
///
/// Everything here aborts the batch before any row is written. Row-level
/// problems are not errors: they degrade per field or skip the row.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File is too large: {size} bytes (maximum {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("Unsupported file format '{0}'. Use .csv, .xlsx or .xls")]
    UnsupportedFormat(String),

    #[error("File is empty or contains no data rows")]
    EmptyFile,

    #[error("Could not read the uploaded file: {0}")]
    UnreadableFile(String),

    #[error("No name column found in the file header")]
    MissingNameColumn,
}
