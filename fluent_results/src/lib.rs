//! Combinators for routing and aggregating batches of fallible outcomes.
//!
//! A batch is any ordered sequence of `Result<T, E>` values, typically
//! produced by mapping a fallible operation over a collection of inputs. The
//! crate provides two kinds of operator:
//!
//! * **routing** ([`for_successes`], [`for_failures`]) visits matching
//!   outcomes with a side-effecting handler and hands the batch back
//!   unchanged. Handler failures are not guarded.
//! * **aggregation** ([`then`], [`catch`], [`collect`]) folds the batch into
//!   a single `Result`. Every item failure is preserved, in order, inside an
//!   [`AggregatedErrors`], and handler failures are converted into the
//!   returned error.
//!
//! [`Outcomes`] and [`OutcomesExt`] expose the same operators as a fluent
//! chain.
//!
//! ```
//! use fluent_results::{BatchError, OutcomesExt};
//!
//! fn validate(name: &str) -> Result<String, BatchError> {
//!     if name.trim().is_empty() {
//!         Err(BatchError::message("name must not be blank"))
//!     } else {
//!         Ok(name.to_owned())
//!     }
//! }
//!
//! let mut logged = 0;
//! let err = ["alpha", " ", "gamma"]
//!     .into_iter()
//!     .map(validate)
//!     .into_outcomes()
//!     .for_each_failure(|_| logged += 1)
//!     .then(|_| Ok(()))
//!     .unwrap_err();
//! assert_eq!(logged, 1);
//! assert_eq!(err.aggregated().map(|agg| agg.len()), Some(1));
//! ```

pub mod aggregation;
mod error;
mod outcomes;
mod result_ext;
pub mod routing;

pub use aggregation::{catch, collect, then};
pub use error::{AggregatedErrors, BatchError, BatchResult};
pub use outcomes::Outcomes;
pub use result_ext::OutcomesExt;
pub use routing::{for_failures, for_successes, try_for_failures, try_for_successes};
