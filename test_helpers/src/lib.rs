//! Test helpers shared across crates.
//!
//! This crate provides batch builders and a recorder for handler calls.

pub mod batch;
pub mod recorder;
