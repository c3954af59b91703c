//! Owned, materialized batches of outcomes with a fluent operator surface.

use crate::{AggregatedErrors, aggregation, routing};

/// An ordered batch of outcomes collected from independent operations.
///
/// Building an `Outcomes` fixes the order and contents of the batch, so a
/// lazy source is consumed exactly once no matter how many operators run over
/// it afterwards. The routing methods return the batch itself, and
/// [`Outcomes::then`] or [`Outcomes::catch`] end the chain.
///
/// # Examples
///
/// ```
/// use fluent_results::{BatchError, Outcomes};
///
/// fn parse(raw: &str) -> Result<u16, BatchError> {
///     raw.parse().map_err(|_| BatchError::message(format!("bad port {raw}")))
/// }
///
/// let mut parsed = 0;
/// let mut rejected = Vec::new();
/// let result = ["80", "http", "443"]
///     .into_iter()
///     .map(parse)
///     .collect::<Outcomes<_, _>>()
///     .for_each_success(|_| parsed += 1)
///     .for_each_failure(|e| rejected.push(e.to_string()))
///     .catch(|_| Ok(()));
///
/// assert_eq!(parsed, 2);
/// assert_eq!(rejected, ["bad port http"]);
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcomes<T, E>(Vec<Result<T, E>>);

impl<T, E> Outcomes<T, E> {
    /// Wrap an already collected batch.
    #[must_use]
    pub const fn new(outcomes: Vec<Result<T, E>>) -> Self {
        Self(outcomes)
    }

    /// Number of outcomes in the batch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the batch holds no outcomes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of successful outcomes.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// Number of failed outcomes.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Iterate over every outcome in order.
    #[must_use = "iterators should be consumed to inspect outcomes"]
    pub fn iter(&self) -> std::slice::Iter<'_, Result<T, E>> {
        self.0.iter()
    }

    /// Iterate over the success values in order.
    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.0.iter().filter_map(|r| r.as_ref().ok())
    }

    /// Iterate over the errors in order.
    pub fn failures(&self) -> impl Iterator<Item = &E> {
        self.0.iter().filter_map(|r| r.as_ref().err())
    }

    /// Borrow the batch as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Result<T, E>] {
        &self.0
    }

    /// Release the underlying outcomes.
    #[must_use]
    pub fn into_inner(self) -> Vec<Result<T, E>> {
        self.0
    }

    /// Pass every success value to `handler`; see [`routing::for_successes`].
    #[must_use]
    pub fn for_each_success<F>(self, handler: F) -> Self
    where
        F: FnMut(&T),
    {
        routing::for_successes(&self.0, handler);
        self
    }

    /// Pass every error to `handler`; see [`routing::for_failures`].
    #[must_use]
    pub fn for_each_failure<F>(self, handler: F) -> Self
    where
        F: FnMut(&E),
    {
        routing::for_failures(&self.0, handler);
        self
    }

    /// Fallible form of [`Outcomes::for_each_success`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `handler`, unchanged. The batch is
    /// dropped in that case.
    pub fn try_for_each_success<H, F>(self, handler: F) -> Result<Self, H>
    where
        F: FnMut(&T) -> Result<(), H>,
    {
        routing::try_for_successes(&self.0, handler)?;
        Ok(self)
    }

    /// Fallible form of [`Outcomes::for_each_failure`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `handler`, unchanged. The batch is
    /// dropped in that case.
    pub fn try_for_each_failure<H, F>(self, handler: F) -> Result<Self, H>
    where
        F: FnMut(&E) -> Result<(), H>,
    {
        routing::try_for_failures(&self.0, handler)?;
        Ok(self)
    }

    /// Collapse into every value or every error; see [`aggregation::collect`].
    ///
    /// # Errors
    ///
    /// Returns all item errors when any outcome failed.
    pub fn collect(self) -> Result<Vec<T>, AggregatedErrors<E>> {
        aggregation::collect(self.0)
    }

    /// Continue only when every outcome succeeded; see [`aggregation::then`].
    ///
    /// # Errors
    ///
    /// Returns an aggregate of the item errors, or the error raised by
    /// `action`.
    pub fn then<F>(self, action: F) -> Result<Vec<T>, E>
    where
        E: From<AggregatedErrors<E>>,
        F: FnOnce(&[T]) -> Result<(), E>,
    {
        aggregation::then(self.0, action)
    }

    /// Report failures to `handler` and fail; see [`aggregation::catch`].
    ///
    /// # Errors
    ///
    /// Returns an aggregate of the item errors, or the error raised by
    /// `handler`.
    pub fn catch<F>(self, handler: F) -> Result<Vec<T>, E>
    where
        E: From<AggregatedErrors<E>>,
        F: FnOnce(&[E]) -> Result<(), E>,
    {
        aggregation::catch(self.0, handler)
    }
}

impl<T, E> Default for Outcomes<T, E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T, E> From<Vec<Result<T, E>>> for Outcomes<T, E> {
    fn from(outcomes: Vec<Result<T, E>>) -> Self {
        Self(outcomes)
    }
}

impl<T, E> FromIterator<Result<T, E>> for Outcomes<T, E> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T, E> IntoIterator for Outcomes<T, E> {
    type Item = Result<T, E>;
    type IntoIter = std::vec::IntoIter<Result<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcomes<T, E> {
    type Item = &'a Result<T, E>;
    type IntoIter = std::slice::Iter<'a, Result<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
