//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading grouping input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File holds no non-blank rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// First row of a subject roster carries no subject label.
    #[error("no subject labels in the first row of {path}")]
    NoSubjects { path: PathBuf },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
