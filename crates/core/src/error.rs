//! Error taxonomy for the filter pipeline and the store.
//!
//! All variants are recoverable and carry enough detail for a caller to adjust
//! the request; none is fatal to the process.

use thiserror::Error;

/// Errors produced by the query interpreter and the filter validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Interpretation produced an empty specification from the input.
    #[error("could not extract any filters from query")]
    NoFiltersRecognized,

    /// The validator rejected an otherwise well-formed specification.
    #[error("conflicting filters: {0}")]
    Conflicting(ConflictReason),
}

/// A typed reason produced by a single validation rule.
///
/// New domain rules append variants here; each rule reports exactly one reason
/// and the first violated rule determines the error surfaced to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// `min_length` exceeds `max_length` — no value can satisfy both bounds.
    #[error("min_length ({min}) cannot be greater than max_length ({max})")]
    LengthBounds { min: usize, max: usize },
}

/// Errors produced by the in-memory store and its snapshot persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A value with the same content fingerprint already exists.
    #[error("string already exists in the system")]
    Duplicate,

    /// No stored value matches the given content.
    #[error("string not found")]
    NotFound,

    /// Snapshot file I/O failed.
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot bytes did not deserialize into valid store data.
    #[error("snapshot corrupt: {0}")]
    Corrupt(String),
}
