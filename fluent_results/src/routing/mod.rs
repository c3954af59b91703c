//! Inspection operators that route each outcome of a batch to a handler.
//!
//! Routing never changes the batch: the sequence passed in is handed back so
//! further operators can be chained onto it. Handlers are not guarded. The
//! infallible forms take callbacks with no error channel, and the `try_`
//! forms stop at the first handler error and return it to the caller
//! untouched. Guarding handlers is the job of the terminal operators in
//! [`crate::aggregation`].
//!
//! The sequence must be iterable more than once, which is expressed as a
//! `Clone` bound on a by-reference iterable such as `&[Result<T, E>]`,
//! `&Vec<Result<T, E>>` or `slice::Iter`.
//!
//! # Examples
//!
//! ```
//! use fluent_results::{for_failures, for_successes};
//!
//! let batch: Vec<Result<u8, &str>> = vec![Ok(1), Err("bad"), Ok(2)];
//! let mut seen = Vec::new();
//! let mut errors = Vec::new();
//! let batch = for_successes(&batch, |v| seen.push(*v));
//! for_failures(batch, |e| errors.push(*e));
//! assert_eq!(seen, [1, 2]);
//! assert_eq!(errors, ["bad"]);
//! ```

/// Invoke `handler` with the value of every successful outcome, in order.
///
/// Failures are skipped. The original `outcomes` are returned unchanged.
pub fn for_successes<'a, I, T, E, F>(outcomes: I, mut handler: F) -> I
where
    I: IntoIterator<Item = &'a Result<T, E>> + Clone,
    T: 'a,
    E: 'a,
    F: FnMut(&'a T),
{
    for value in outcomes.clone().into_iter().filter_map(|r| r.as_ref().ok()) {
        handler(value);
    }
    outcomes
}

/// Invoke `handler` with the error of every failed outcome, in order.
///
/// Successes are skipped. The original `outcomes` are returned unchanged.
pub fn for_failures<'a, I, T, E, F>(outcomes: I, mut handler: F) -> I
where
    I: IntoIterator<Item = &'a Result<T, E>> + Clone,
    T: 'a,
    E: 'a,
    F: FnMut(&'a E),
{
    for error in outcomes.clone().into_iter().filter_map(|r| r.as_ref().err()) {
        handler(error);
    }
    outcomes
}

/// Fallible form of [`for_successes`].
///
/// # Errors
///
/// Returns the first error raised by `handler`. Remaining successes are not
/// visited and the error is passed through as-is.
pub fn try_for_successes<'a, I, T, E, H, F>(outcomes: I, mut handler: F) -> Result<I, H>
where
    I: IntoIterator<Item = &'a Result<T, E>> + Clone,
    T: 'a,
    E: 'a,
    F: FnMut(&'a T) -> Result<(), H>,
{
    for value in outcomes.clone().into_iter().filter_map(|r| r.as_ref().ok()) {
        handler(value)?;
    }
    Ok(outcomes)
}

/// Fallible form of [`for_failures`].
///
/// # Errors
///
/// Returns the first error raised by `handler`. Remaining failures are not
/// visited and the error is passed through as-is.
pub fn try_for_failures<'a, I, T, E, H, F>(outcomes: I, mut handler: F) -> Result<I, H>
where
    I: IntoIterator<Item = &'a Result<T, E>> + Clone,
    T: 'a,
    E: 'a,
    F: FnMut(&'a E) -> Result<(), H>,
{
    for error in outcomes.clone().into_iter().filter_map(|r| r.as_ref().err()) {
        handler(error)?;
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests;
