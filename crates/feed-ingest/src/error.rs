//! Error types for catalog table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a catalog table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source table not found.
    #[error("table file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header row could be read.
    #[error("table is empty: {path}")]
    EmptyTable { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
