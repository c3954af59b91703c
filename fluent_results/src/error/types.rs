//! Default error enum for batches of fallible operations.

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Convenience alias for results carrying a [`BatchError`].
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors raised by individual operations or by handlers inside a batch.
///
/// Any error type works with the combinators provided it implements
/// `From<AggregatedErrors<Self>>`; this enum is the ready-made choice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BatchError {
    /// A plain failure message, displayed verbatim.
    #[error("{0}")]
    Message(String),

    /// An error raised by some other library.
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync>),

    /// Several operations from the same batch failed.
    #[error("{n} operations failed:\n{agg}", n = .0.len(), agg = .0)]
    Aggregate(Box<AggregatedErrors<BatchError>>),
}
