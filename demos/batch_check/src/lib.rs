//! Library half of the `batch-check` demo.
//!
//! Endpoint definitions are loaded from layered configuration, validated one
//! by one into outcomes, and collapsed into a single verdict with the
//! `fluent_results` operators.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
