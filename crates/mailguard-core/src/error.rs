//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source has no column with the required name.
    #[error("input must contain a '{column}' column for email content")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// A single record has no value for a required field.
    #[error("record {index} is missing the '{field}' field")]
    MissingField {
        /// Zero-based position of the record in its source.
        index: usize,
        /// Name of the missing field.
        field: String,
    },

    /// A category name is not present in the registry.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A record index does not exist in the dataset.
    #[error("record index {index} out of range (dataset has {len} records)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of records available.
        len: usize,
    },

    /// Delimited input could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
