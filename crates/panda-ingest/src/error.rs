//! Error types for raw extract and load-file IO.

use std::path::PathBuf;

use panda_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading extracts or load files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// The csv reader or writer failed.
    #[error("failed to process CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row ends before a required selected column.
    #[error("{path}:{line}: row has {found} columns, column {needed} ('{column}') is required")]
    ShortRow {
        path: PathBuf,
        line: u64,
        column: String,
        needed: usize,
        found: usize,
    },

    /// Column selection spec could not be parsed.
    #[error("invalid column selection '{spec}': {reason}")]
    InvalidSelection { spec: String, reason: String },

    /// Load-file header differs from the schema.
    #[error("{path}: header {found:?} does not match schema columns {expected:?}")]
    HeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A load-file row does not fit the schema.
    #[error("{path}:{line}: {source}")]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::ShortRow {
            path: PathBuf::from("/data/HIL_20250630.txt"),
            line: 12,
            column: "voter_ID".to_string(),
            needed: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "/data/HIL_20250630.txt:12: row has 1 columns, column 2 ('voter_ID') is required"
        );
    }
}
