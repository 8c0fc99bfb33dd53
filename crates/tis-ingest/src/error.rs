//! Error types for tabular file ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a tabular source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying reader rejected the file contents.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Requested worksheet does not exist in the workbook.
    #[error("worksheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Workbook contains no worksheets.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    /// Header row contains an empty column name.
    #[error("empty column name in {path}")]
    EmptyColumnName { path: PathBuf },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/input.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /data/input.csv");
    }

    #[test]
    fn error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("x".into());
        let err: IngestError = polars_err.into();
        assert!(matches!(err, IngestError::DataFrame { .. }));
    }
}
