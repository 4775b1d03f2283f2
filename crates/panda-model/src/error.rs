use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("row {row}: required column '{column}' is missing")]
    MissingColumn { column: String, row: usize },
    #[error("{schema}: expected {expected} fields, found {actual}")]
    FieldCount {
        schema: String,
        expected: usize,
        actual: usize,
    },
    #[error("{schema}: id column '{column}' is not part of the schema")]
    UnknownIdColumn { schema: String, column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
