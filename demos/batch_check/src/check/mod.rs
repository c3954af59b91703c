//! Validation of configured endpoints.
//!
//! Each [`EndpointSpec`] is validated on its own into a `Result`, so one bad
//! entry never hides another. The batch is then routed through the logging
//! handlers and collapsed into a single verdict.

use std::collections::HashSet;

use fluent_results::Outcomes;
use tracing::{debug, info, warn};

use crate::config::{CheckConfig, EndpointSpec};
use crate::error::{CheckError, Result};

/// An endpoint that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Trimmed endpoint name.
    pub name: String,
    /// Port within the configured bounds.
    pub port: u16,
}

/// Validate the endpoint at `index` against the port bounds.
///
/// # Errors
///
/// Returns [`CheckError::BlankName`] or [`CheckError::PortOutOfRange`].
pub fn validate(index: usize, spec: &EndpointSpec, config: &CheckConfig) -> Result<Endpoint> {
    let name = spec.name.trim();
    if name.is_empty() {
        return Err(CheckError::BlankName { index });
    }
    let out_of_range = || CheckError::PortOutOfRange {
        name: name.to_owned(),
        port: spec.port,
        min: config.min_port,
        max: config.max_port,
    };
    let port = u16::try_from(spec.port).map_err(|_| out_of_range())?;
    if !(config.min_port..=config.max_port).contains(&port) {
        return Err(out_of_range());
    }
    Ok(Endpoint {
        name: name.to_owned(),
        port,
    })
}

/// Validate every configured endpoint, keeping their order.
#[must_use]
pub fn validate_all(config: &CheckConfig) -> Outcomes<Endpoint, CheckError> {
    config
        .endpoints
        .iter()
        .enumerate()
        .map(|(index, spec)| validate(index, spec, config))
        .collect()
}

/// Check the whole batch.
///
/// Accepted and rejected endpoints are logged one by one. When unique names
/// are required the batch must be free of failures before names are
/// compared; otherwise the rejections are summarised and the batch fails.
///
/// # Errors
///
/// Returns [`CheckError::Rejected`] with every per-endpoint failure, or
/// [`CheckError::DuplicateName`] when unique names are required and two
/// valid endpoints collide.
pub fn check_endpoints(config: &CheckConfig) -> Result<Vec<Endpoint>> {
    let outcomes = validate_all(config)
        .for_each_success(|e| debug!(name = %e.name, port = e.port, "endpoint accepted"))
        .for_each_failure(|err| warn!(error = %err, "endpoint rejected"));
    if config.require_unique_names {
        outcomes.then(ensure_unique_names)
    } else {
        outcomes.catch(|errors| {
            info!(rejected = errors.len(), "endpoint batch rejected");
            Ok(())
        })
    }
}

fn ensure_unique_names(endpoints: &[Endpoint]) -> Result<()> {
    let mut seen = HashSet::with_capacity(endpoints.len());
    match endpoints.iter().find(|e| !seen.insert(e.name.as_str())) {
        Some(dup) => Err(CheckError::DuplicateName {
            name: dup.name.clone(),
        }),
        None => Ok(()),
    }
}
