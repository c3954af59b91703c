//! Trait-based conversions into `BatchError`.

use super::{AggregatedErrors, BatchError};

impl From<AggregatedErrors<Self>> for BatchError {
    fn from(errors: AggregatedErrors<Self>) -> Self {
        Self::Aggregate(Box::new(errors))
    }
}

impl From<String> for BatchError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for BatchError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> Self {
        Self::Source(Box::new(e))
    }
}
