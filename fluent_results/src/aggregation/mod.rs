//! Terminal operators that collapse a batch into a single outcome.
//!
//! All three functions take the batch by value and materialize it in one
//! ordered pass, so single-pass iterators are safe to pass in. Item errors
//! are never dropped: when any outcome failed, the result carries every
//! failure in input order as an [`AggregatedErrors`].
//!
//! Handlers given to [`then`] and [`catch`] are guarded. An `Err` returned by
//! the handler becomes the sole error of the result and supersedes the item
//! failures, if there were any.

use tracing::debug;

use crate::AggregatedErrors;

struct Partitioned<T, E> {
    values: Vec<T>,
    errors: Vec<E>,
}

fn partition<I, T, E>(outcomes: I) -> Partitioned<T, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    Partitioned { values, errors }
}

/// Collapse a batch into all of its values, or all of its errors.
///
/// Success values are discarded as soon as one failure is present.
///
/// # Errors
///
/// Returns every item error, in input order, when at least one outcome
/// failed.
///
/// # Examples
///
/// ```
/// use fluent_results::collect;
///
/// let ok: Vec<Result<u8, &str>> = vec![Ok(1), Ok(2)];
/// assert_eq!(collect(ok), Ok(vec![1, 2]));
///
/// let mixed: Vec<Result<u8, &str>> = vec![Ok(1), Err("a"), Err("b")];
/// let errors = collect(mixed).unwrap_err();
/// assert_eq!(errors.as_slice(), ["a", "b"]);
/// ```
pub fn collect<I, T, E>(outcomes: I) -> Result<Vec<T>, AggregatedErrors<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let Partitioned { values, errors } = partition(outcomes);
    match AggregatedErrors::try_new(errors) {
        Some(agg) => {
            debug!(
                successes = values.len(),
                failures = agg.len(),
                "batch contains failures"
            );
            Err(agg)
        }
        None => {
            debug!(successes = values.len(), failures = 0, "batch succeeded");
            Ok(values)
        }
    }
}

/// Continue with `action` only when every outcome succeeded.
///
/// With no failures, `action` receives every value in order and, if it
/// returns `Ok`, the same values are returned. An empty batch counts as
/// fully successful. With any failure, `action` is never invoked.
///
/// # Errors
///
/// * An aggregate of every item error, converted into `E`, when any outcome
///   failed.
/// * The error returned by `action`, unwrapped, when `action` fails.
///
/// # Examples
///
/// ```
/// use fluent_results::{BatchError, then};
///
/// let batch: Vec<Result<u32, BatchError>> = vec![Ok(1), Ok(2), Ok(3)];
/// let mut total = 0_u32;
/// let values = then(batch, |values| {
///     total = values.iter().sum();
///     Ok(())
/// })?;
/// assert_eq!(values, [1, 2, 3]);
/// assert_eq!(total, 6);
/// # Ok::<(), BatchError>(())
/// ```
pub fn then<I, T, E, F>(outcomes: I, action: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: From<AggregatedErrors<E>>,
    F: FnOnce(&[T]) -> Result<(), E>,
{
    let values = collect(outcomes).map_err(E::from)?;
    match action(&values) {
        Ok(()) => Ok(values),
        Err(err) => {
            debug!(successes = values.len(), "continuation action failed");
            Err(err)
        }
    }
}

/// Report the failures of a batch to `handler` without recovering from
/// them.
///
/// When no outcome failed, the values are returned and `handler` is never
/// invoked. Otherwise `handler` sees every error in order, and the batch
/// still fails.
///
/// # Errors
///
/// * An aggregate of every item error, converted into `E`, after `handler`
///   returned `Ok`.
/// * The error returned by `handler`, unwrapped, when `handler` fails. The
///   item errors are discarded in that case.
///
/// # Examples
///
/// ```
/// use fluent_results::{BatchError, catch};
///
/// let batch: Vec<Result<u32, BatchError>> =
///     vec![Ok(1), Err(BatchError::message("Error 0"))];
/// let mut reported = 0;
/// let err = catch(batch, |errors| {
///     reported = errors.len();
///     Ok(())
/// })
/// .unwrap_err();
/// assert_eq!(reported, 1);
/// assert!(err.is_aggregate());
/// ```
pub fn catch<I, T, E, F>(outcomes: I, handler: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: From<AggregatedErrors<E>>,
    F: FnOnce(&[E]) -> Result<(), E>,
{
    let agg = match collect(outcomes) {
        Ok(values) => return Ok(values),
        Err(agg) => agg,
    };
    match handler(agg.as_slice()) {
        Ok(()) => Err(E::from(agg)),
        Err(err) => {
            debug!(
                superseded = agg.len(),
                "failure handler raised; item failures discarded"
            );
            Err(err)
        }
    }
}
