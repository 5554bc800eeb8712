use std::path::PathBuf;

use thiserror::Error;

/// Structural ingestion failures.
///
/// Row-level problems never surface here; a malformed record becomes a
/// best-effort row instead. These errors abort the whole operation.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported file type: {0} (expected .csv, .xls, or .xlsx)")]
    UnsupportedType(PathBuf),

    #[error("file too large: {size} bytes exceeds the {limit} byte upload ceiling")]
    TooLarge { size: u64, limit: u64 },

    #[error("no data found in file")]
    NoData,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}
