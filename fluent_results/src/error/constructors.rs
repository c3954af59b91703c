//! Constructors and accessors for `BatchError`.

use super::{AggregatedErrors, BatchError};

impl BatchError {
    /// Construct a failure carrying only a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_results::BatchError;
    /// let e = BatchError::message("Error X");
    /// assert_eq!(e.to_string(), "Error X");
    /// ```
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wrap an error produced elsewhere.
    #[must_use]
    pub fn from_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(source))
    }

    /// The aggregated failures, when this error bundles several.
    #[must_use]
    pub fn aggregated(&self) -> Option<&AggregatedErrors<Self>> {
        match self {
            Self::Aggregate(agg) => Some(agg),
            Self::Message(_) | Self::Source(_) => None,
        }
    }

    /// Returns `true` for [`BatchError::Aggregate`].
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }
}
