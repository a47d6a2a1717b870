//! Error taxonomy of the dashboard pipeline.
//!
//! - [`ValidationError`]: client-side precondition failure, never reaches the network.
//! - [`RemoteError`]: non-2xx response or transport failure on a gateway call.
//! - [`DegradedDataError`]: an optional secondary source failed and was replaced
//!   with an empty result. Logged, never surfaced as a blocking error.
//! - [`ConfigError`]: configuration or preference file problems.

use std::path::PathBuf;

pub use crate::gateway::error::{GatewayOperation, RemoteError, RemoteErrorKind, RemoteResult};

/// Client-side precondition failure carrying the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A secondary data source failed and its data was substituted with an empty
/// collection.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{source_name} unavailable, continuing with reduced fidelity: {cause}")]
pub struct DegradedDataError {
    pub source_name: &'static str,
    #[source]
    pub cause: RemoteError,
}

/// Failure of a user-initiated pipeline operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl PipelineError {
    /// Inline message shown to the user; `remote_fallback` replaces a missing
    /// backend detail.
    pub fn user_message(&self, remote_fallback: &str) -> String {
        match self {
            PipelineError::Validation(err) => err.message().to_string(),
            PipelineError::Remote(err) => err.detail_or(remote_fallback).to_string(),
        }
    }
}

/// Configuration and preference file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No nexus.toml found in standard locations")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ValidationError::new("Please provide Building ID and Max Load (kW).");
        assert_eq!(err.to_string(), "Please provide Building ID and Max Load (kW).");
    }

    #[test]
    fn test_user_message_uses_fallback_for_remote_without_detail() {
        let err: PipelineError =
            RemoteError::transport(GatewayOperation::Optimize, "connection reset").into();
        assert_eq!(err.user_message("Try again."), "Try again.");
    }

    #[test]
    fn test_user_message_for_validation_ignores_fallback() {
        let err: PipelineError = ValidationError::new("Name and type are required.").into();
        assert_eq!(err.user_message("unused"), "Name and type are required.");
    }

    #[test]
    fn test_degraded_error_mentions_source() {
        let err = DegradedDataError {
            source_name: "energy intensity",
            cause: RemoteError::status(GatewayOperation::GetIntensity, 503, None),
        };
        assert!(err.to_string().starts_with("energy intensity unavailable"));
    }
}
