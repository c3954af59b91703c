//! Error types produced when a batch of outcomes is collapsed.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::{BatchError, BatchResult};
