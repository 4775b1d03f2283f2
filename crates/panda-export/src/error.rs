//! Error types for sinks and export runs.

use thiserror::Error;

/// A single sink call failed.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The batch exceeds what the API accepts in one bulk call.
    #[error("batch of {size} records exceeds the bulk limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },
}

/// An export run or registration stopped.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// Probing or creating the dataset failed; no rows were sent.
    #[error("failed to register dataset '{dataset}': {source}")]
    Registration {
        dataset: String,
        #[source]
        source: SinkError,
    },

    /// A batch was rejected. Batches before `index` stay committed.
    #[error(
        "batch {index} ({records} records) failed after {committed} records were committed: {source}"
    )]
    Batch {
        index: usize,
        records: usize,
        committed: usize,
        #[source]
        source: SinkError,
    },
}

impl ExportError {
    /// Records confirmed by the sink before the failure.
    pub fn committed(&self) -> usize {
        match self {
            Self::Batch { committed, .. } => *committed,
            Self::InvalidBatchSize | Self::Registration { .. } => 0,
        }
    }
}
