//! Ordered container for the failures gathered from one batch.

use std::{error::Error, fmt};

/// Every failure encountered while collapsing a batch, in input order.
///
/// Aggregates built by [`crate::then`], [`crate::catch`] and
/// [`crate::collect`] always hold at least one error.
///
/// # Examples
///
/// ```
/// use fluent_results::{AggregatedErrors, BatchError};
///
/// let agg = AggregatedErrors::new(vec![
///     BatchError::message("Error 0"),
///     BatchError::message("Error 1"),
/// ]);
/// assert_eq!(agg.len(), 2);
/// assert_eq!(agg.to_string(), "1: Error 0\n2: Error 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedErrors<E>(Vec<E>);

impl<E> AggregatedErrors<E> {
    /// Wraps `errors`, returning `None` when there is nothing to aggregate.
    #[must_use]
    pub fn try_new(errors: Vec<E>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self(errors))
    }

    /// Wraps at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`AggregatedErrors::try_new`] when the
    /// list may be empty.
    #[must_use]
    #[track_caller]
    pub fn new(errors: Vec<E>) -> Self {
        Self::try_new(errors).map_or_else(
            || panic!("an aggregate requires at least one error"),
            |agg| agg,
        )
    }

    /// Iterate over the contained errors in input order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for aggregates built through [`AggregatedErrors::new`]
    /// or [`AggregatedErrors::try_new`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first failure of the batch.
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.0.first()
    }

    /// Borrow the errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Release the underlying errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.0
    }
}

impl<E> AsRef<[E]> for AggregatedErrors<E> {
    fn as_ref(&self) -> &[E] {
        &self.0
    }
}

impl<E: fmt::Display> fmt::Display for AggregatedErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl<E: Error> Error for AggregatedErrors<E> {}

impl<'a, E> IntoIterator for &'a AggregatedErrors<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E> IntoIterator for AggregatedErrors<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
