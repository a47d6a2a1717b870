//! Remote data gateway: typed access to the monitoring backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services/) - view pipelines             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Gateway Traits (traits.rs) - Abstract Interface        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │                              │
//! ┌───▼──────────────┐      ┌────────▼─────────┐
//! │  HttpGateway     │      │  LocalGateway    │
//! │  (reqwest)       │      │  (in-memory)     │
//! └──────────────────┘      └──────────────────┘
//! ```
//!
//! Gateways perform no transformation. Every call is a single round trip that
//! either yields the decoded body or a [`RemoteError`]. The local gateway is a
//! test double; where nothing was seeded it answers fixed fallback values.

#[cfg(not(any(feature = "http-gateway", feature = "local-gateway")))]
compile_error!("Enable at least one gateway backend feature.");

pub mod config;
pub mod error;
pub mod factory;
#[cfg(feature = "http-gateway")]
pub mod http;
#[cfg(feature = "local-gateway")]
pub mod local;
pub mod traits;

pub use config::{GatewayConfig, NexusConfig, PreferenceSettings, DEFAULT_BASE_URL};
pub use error::{GatewayOperation, RemoteError, RemoteErrorKind, RemoteResult};
pub use factory::{GatewayFactory, GatewayKind};
#[cfg(feature = "http-gateway")]
pub use http::HttpGateway;
#[cfg(feature = "local-gateway")]
pub use local::LocalGateway;
pub use traits::{
    AnalyticsGateway, CityGateway, DashboardGateway, EducationGateway, EnergyGateway,
    OptimizationGateway,
};
