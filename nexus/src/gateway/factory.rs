//! Gateway factory for dependency injection.

use std::str::FromStr;
use std::sync::Arc;

use super::config::GatewayConfig;
#[cfg(feature = "http-gateway")]
use super::http::HttpGateway;
#[cfg(feature = "local-gateway")]
use super::local::LocalGateway;
use super::traits::DashboardGateway;
use crate::error::ConfigError;

/// Gateway implementation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    /// reqwest client against the live backend
    Http,
    /// In-memory gateway
    Local,
}

impl FromStr for GatewayKind {
    type Err = String;

    /// Parse gateway kind from string ("http", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" | "remote" => Ok(Self::Http),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown gateway type: {}", s)),
        }
    }
}

/// Factory for creating gateway instances.
pub struct GatewayFactory;

impl GatewayFactory {
    /// Create the gateway selected by `config`.
    pub fn create(config: &GatewayConfig) -> Result<Arc<dyn DashboardGateway>, ConfigError> {
        match config.gateway_kind()? {
            GatewayKind::Http => {
                #[cfg(feature = "http-gateway")]
                {
                    let gateway = HttpGateway::new(config)?;
                    Ok(Arc::new(gateway) as Arc<dyn DashboardGateway>)
                }
                #[cfg(not(feature = "http-gateway"))]
                {
                    Err(ConfigError::Invalid(
                        "HTTP gateway feature not enabled".to_string(),
                    ))
                }
            }
            GatewayKind::Local => {
                #[cfg(feature = "local-gateway")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-gateway"))]
                {
                    Err(ConfigError::Invalid(
                        "Local gateway feature not enabled".to_string(),
                    ))
                }
            }
        }
    }

    /// Create an empty in-memory gateway.
    #[cfg(feature = "local-gateway")]
    pub fn create_local() -> Arc<dyn DashboardGateway> {
        Arc::new(LocalGateway::new())
    }
}
