//! Command-line surface of the demo.

use camino::Utf8PathBuf;
use clap::Parser;
use serde::Serialize;

/// Validate a batch of endpoint definitions.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "batch-check", version, about)]
pub struct CheckCli {
    /// Configuration file to load instead of `batch_check.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Reject batches in which two endpoints share a name.
    #[arg(long)]
    pub require_unique_names: bool,

    /// Lowest accepted port.
    #[arg(long, value_name = "PORT")]
    pub min_port: Option<u16>,

    /// Highest accepted port.
    #[arg(long, value_name = "PORT")]
    pub max_port: Option<u16>,
}

/// The CLI values that were actually supplied, as a Figment layer.
#[derive(Debug, Default, Serialize)]
pub(crate) struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) require_unique_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_port: Option<u16>,
}

impl From<&CheckCli> for CliOverrides {
    fn from(cli: &CheckCli) -> Self {
        Self {
            require_unique_names: cli.require_unique_names.then_some(true),
            min_port: cli.min_port,
            max_port: cli.max_port,
        }
    }
}
