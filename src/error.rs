//! Engine error taxonomy.
//!
//! Every error is recoverable at the call site and carries a display-ready
//! message naming the offending record or criterion; the engine never
//! terminates the process.

use thiserror::Error;

/// Errors produced by the SAW decision engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SawError {
    /// A criterion value could not be parsed as a finite number.
    ///
    /// Raised at the `add_record` boundary; the record is not inserted.
    #[error("value '{value}' for criterion '{criterion}' is not a valid number")]
    InvalidValue { criterion: String, value: String },

    /// A record with the same name already exists (case-sensitive match).
    #[error("a record named '{name}' already exists")]
    DuplicateKey { name: String },

    /// Normalization or scoring was attempted on an empty dataset.
    #[error("the dataset is empty; add at least one record before ranking")]
    EmptyDataset,

    /// Scoring was attempted before normalization produced output.
    #[error("dataset has not been normalized; run normalization first")]
    NotNormalized,

    /// The criteria configuration is invalid (unrecognized direction,
    /// negative weight, duplicate or empty criterion list).
    #[error("invalid criteria configuration: {0}")]
    InvalidConfiguration(String),
}
