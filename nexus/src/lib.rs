//! # SmartEd-City Nexus dashboard pipeline
//!
//! Client-side data pipeline of the city/education monitoring dashboard.
//!
//! The crate fetches buildings, energy forecasts, intensity, institution risk
//! and optimization schedules from the monitoring backend and turns them into
//! serializable view models that a front end draws as-is. It computes no
//! predictions itself; it consumes and safely renders whatever the backend
//! returns, including partial, empty or absent data.
//!
//! ## Features
//!
//! - **Forecast bucketing**: hourly forecasts summed into four 6-hour periods
//! - **Rank palette**: chart colours by magnitude, chart order by time
//! - **City map**: markers sized by 24h energy intensity, coloured by type
//! - **Optimization workflow**: form validation, mode-dependent payloads and
//!   the result view
//! - **Degraded loading**: the map survives a failing intensity source
//!
//! ## Architecture
//!
//! - [`api`]: Backend entities and view models
//! - [`gateway`]: Typed access to the backend, HTTP or in-memory
//! - [`services`]: Transforms and per-view workflows
//! - [`routes`]: View model types
//! - [`preferences`]: Process-wide theme preference
//! - [`error`]: Error taxonomy

pub mod api;
pub mod error;
pub mod gateway;
pub mod models;
pub mod preferences;
pub mod routes;
pub mod services;
