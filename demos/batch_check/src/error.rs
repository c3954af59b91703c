//! Error types for the `batch-check` demo.
//!
//! Per-endpoint validation failures and configuration problems share one
//! enum so a rejected batch can be aggregated and reported as a whole.

use camino::Utf8PathBuf;
use fluent_results::AggregatedErrors;
use thiserror::Error;

/// Convenience alias for demo results.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors raised while loading or checking an endpoint batch.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An endpoint name collapsed to nothing after trimming.
    #[error("endpoint #{index} must have a visible name")]
    BlankName {
        /// Position of the endpoint in the configured list.
        index: usize,
    },

    /// An endpoint port fell outside the configured bounds.
    #[error("endpoint '{name}' uses port {port}, outside {min}..={max}")]
    PortOutOfRange {
        /// Name of the offending endpoint.
        name: String,
        /// Port that was configured.
        port: u32,
        /// Lowest accepted port.
        min: u16,
        /// Highest accepted port.
        max: u16,
    },

    /// Two endpoints share a name while unique names are required.
    #[error("endpoint name '{name}' is used more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// The port bounds are inverted.
    #[error("min_port {min} exceeds max_port {max}")]
    InvalidRange {
        /// Configured lower bound.
        min: u16,
        /// Configured upper bound.
        max: u16,
    },

    /// A configuration file named on the command line does not exist.
    #[error("configuration file '{path}' does not exist")]
    MissingConfig {
        /// Path supplied via `--config`.
        path: Utf8PathBuf,
    },

    /// A path named on the command line exists but is not a regular file.
    #[error("configuration path '{path}' is not a file")]
    NotAFile {
        /// Path supplied via `--config`.
        path: Utf8PathBuf,
    },

    /// Figment could not merge or deserialize the configuration layers.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// One or more endpoints were rejected.
    #[error("{n} endpoints rejected:\n{agg}", n = .0.len(), agg = .0)]
    Rejected(AggregatedErrors<CheckError>),
}

impl From<AggregatedErrors<Self>> for CheckError {
    fn from(errors: AggregatedErrors<Self>) -> Self {
        Self::Rejected(errors)
    }
}

impl From<figment::Error> for CheckError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}
