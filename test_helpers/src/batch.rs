//! Builders for batches of outcomes with predictable contents.
//!
//! A batch built with `successes = s` and `failures = f` holds the values
//! `0..s` followed by `f` errors whose messages read `"Error 0"`,
//! `"Error 1"`, and so on.
//!
//! # Examples
//!
//! ```
//! use fluent_results_test_helpers::batch::{error_messages, mixed_batch_with};
//!
//! let batch = mixed_batch_with(2, 1, |msg| msg);
//! assert_eq!(batch, [Ok(0), Ok(1), Err(String::from("Error 0"))]);
//! assert_eq!(error_messages(2), ["Error 0", "Error 1"]);
//! ```

/// Message carried by the `index`th failure of a batch.
#[must_use]
pub fn error_message(index: usize) -> String {
    format!("Error {index}")
}

/// The messages of the first `count` failures, in order.
#[must_use]
pub fn error_messages(count: usize) -> Vec<String> {
    (0..count).map(error_message).collect()
}

/// Builds `successes` values followed by `failures` errors.
///
/// `make_error` turns each failure message into the caller's error type.
pub fn mixed_batch_with<E, F>(
    successes: usize,
    failures: usize,
    make_error: F,
) -> Vec<Result<usize, E>>
where
    F: FnMut(String) -> E,
{
    lazy_batch_with(successes, failures, make_error).collect()
}

/// Lazy form of [`mixed_batch_with`] that can only be traversed once.
pub fn lazy_batch_with<E, F>(
    successes: usize,
    failures: usize,
    mut make_error: F,
) -> impl Iterator<Item = Result<usize, E>>
where
    F: FnMut(String) -> E,
{
    (0..successes)
        .map(Ok)
        .chain((0..failures).map(move |i| Err(make_error(error_message(i)))))
}
