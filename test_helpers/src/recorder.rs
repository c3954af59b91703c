//! Shared log of handler invocations.
//!
//! Several handlers in one chain can record into the same log, which lets
//! tests assert on both the number and the relative order of calls.
//!
//! # Examples
//!
//! ```
//! use fluent_results_test_helpers::recorder::CallLog;
//!
//! let log = CallLog::default();
//! log.record("first");
//! log.record("second");
//! assert_eq!(log.count(), 2);
//! assert_eq!(log.calls(), ["first", "second"]);
//! ```

use parking_lot::Mutex;

/// Ordered record of the values handlers were called with.
#[derive(Debug)]
pub struct CallLog<T> {
    calls: Mutex<Vec<T>>,
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<T> CallLog<T> {
    /// Appends one call.
    pub fn record(&self, value: T) {
        self.calls.lock().push(value);
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Removes and returns every recorded call.
    #[must_use]
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.calls.lock())
    }
}

impl<T: Clone> CallLog<T> {
    /// Snapshot of every recorded call, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}
