//! Extensions for running the terminal operators straight off an iterator.
//!
//! These helpers save collecting into [`Outcomes`] when a batch is produced
//! by mapping a fallible operation and consumed right away.
//!
//! # Examples
//!
//! ```
//! use fluent_results::{BatchError, OutcomesExt};
//!
//! fn double(v: u32) -> Result<u32, BatchError> {
//!     v.checked_mul(2).ok_or_else(|| BatchError::message("overflow"))
//! }
//!
//! let doubled = [1, 2, 3].into_iter().map(double).then_all(|_| Ok(()))?;
//! assert_eq!(doubled, [2, 4, 6]);
//!
//! let err = [u32::MAX, 1]
//!     .into_iter()
//!     .map(double)
//!     .catch_all(|_| Ok(()))
//!     .unwrap_err();
//! assert!(err.is_aggregate());
//! # Ok::<(), BatchError>(())
//! ```

use crate::{AggregatedErrors, Outcomes, aggregation};

/// Fluent access to the batch operators for any iterable of `Result`s.
pub trait OutcomesExt<T, E>: IntoIterator<Item = Result<T, E>> + Sized {
    /// Materialize the batch so the routing operators can be chained.
    fn into_outcomes(self) -> Outcomes<T, E>;

    /// Collapse into every value or every error.
    ///
    /// # Errors
    ///
    /// Returns all item errors when any outcome failed.
    fn collect_all(self) -> Result<Vec<T>, AggregatedErrors<E>>;

    /// Run `action` only when every outcome succeeded; see
    /// [`aggregation::then`].
    ///
    /// # Errors
    ///
    /// Returns an aggregate of the item errors, or the error raised by
    /// `action`.
    fn then_all<F>(self, action: F) -> Result<Vec<T>, E>
    where
        E: From<AggregatedErrors<E>>,
        F: FnOnce(&[T]) -> Result<(), E>;

    /// Report failures to `handler` and fail; see [`aggregation::catch`].
    ///
    /// # Errors
    ///
    /// Returns an aggregate of the item errors, or the error raised by
    /// `handler`.
    fn catch_all<F>(self, handler: F) -> Result<Vec<T>, E>
    where
        E: From<AggregatedErrors<E>>,
        F: FnOnce(&[E]) -> Result<(), E>;
}

impl<I, T, E> OutcomesExt<T, E> for I
where
    I: IntoIterator<Item = Result<T, E>>,
{
    fn into_outcomes(self) -> Outcomes<T, E> {
        self.into_iter().collect()
    }

    fn collect_all(self) -> Result<Vec<T>, AggregatedErrors<E>> {
        aggregation::collect(self)
    }

    fn then_all<F>(self, action: F) -> Result<Vec<T>, E>
    where
        E: From<AggregatedErrors<E>>,
        F: FnOnce(&[T]) -> Result<(), E>,
    {
        aggregation::then(self, action)
    }

    fn catch_all<F>(self, handler: F) -> Result<Vec<T>, E>
    where
        E: From<AggregatedErrors<E>>,
        F: FnOnce(&[E]) -> Result<(), E>,
    {
        aggregation::catch(self, handler)
    }
}
