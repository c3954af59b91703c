//! Layered configuration for the demo.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, environment
//! variables prefixed with `BATCH_CHECK_`, then flags given on the command
//! line.

use camino::Utf8PathBuf;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{CheckCli, CliOverrides};
use crate::error::{CheckError, Result};

/// File consulted when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "batch_check.toml";

/// Prefix for environment overrides, e.g. `BATCH_CHECK_MIN_PORT`.
pub const ENV_PREFIX: &str = "BATCH_CHECK_";

/// One endpoint as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointSpec {
    /// Human-readable endpoint name.
    pub name: String,
    /// Port as configured; checked against the bounds during validation.
    pub port: u32,
}

/// Fully merged demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Lowest accepted port.
    pub min_port: u16,
    /// Highest accepted port.
    pub max_port: u16,
    /// Reject batches in which two endpoints share a name.
    pub require_unique_names: bool,
    /// Endpoints to validate, in order.
    pub endpoints: Vec<EndpointSpec>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_port: 1024,
            max_port: u16::MAX,
            require_unique_names: false,
            endpoints: Vec::new(),
        }
    }
}

/// Merge every configuration layer for `cli`.
///
/// # Errors
///
/// Returns [`CheckError::MissingConfig`] when `--config` names a missing
/// file, [`CheckError::NotAFile`] when it names something other than a
/// regular file, [`CheckError::Config`] when a layer cannot be parsed, and
/// [`CheckError::InvalidRange`] when the merged bounds are inverted.
pub fn load_config(cli: &CheckCli) -> Result<CheckConfig> {
    let path = config_path(cli)?;
    let config: CheckConfig = Figment::from(Serialized::defaults(CheckConfig::default()))
        .merge(Toml::file(path.as_std_path()))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(CliOverrides::from(cli)))
        .extract()?;
    if config.min_port > config.max_port {
        return Err(CheckError::InvalidRange {
            min: config.min_port,
            max: config.max_port,
        });
    }
    tracing::debug!(
        path = %path,
        endpoints = config.endpoints.len(),
        "configuration loaded"
    );
    Ok(config)
}

fn config_path(cli: &CheckCli) -> Result<Utf8PathBuf> {
    match &cli.config {
        Some(path) if !path.exists() => Err(CheckError::MissingConfig { path: path.clone() }),
        Some(path) if !path.is_file() => Err(CheckError::NotAFile { path: path.clone() }),
        Some(path) => Ok(path.clone()),
        None => Ok(Utf8PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}
