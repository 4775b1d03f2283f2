use panda_model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A built-in schema definition is inconsistent.
    #[error(transparent)]
    Schema(#[from] ModelError),

    /// A row could not be mapped onto the schema.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ModelError,
    },

    /// A record does not fit the schema it is being sorted under.
    #[error("record {position}: {source}")]
    Record {
        position: usize,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
