//! Service layer: the transforms and workflows behind each view.
//!
//! Pure transforms (`forecast_buckets`, `palette`, `city_map`) take decoded
//! backend data and return view models. Workflows (`map_loader`,
//! `optimization`, `registry`, `forecast_view`, `overview`) drive a gateway
//! and own the state of one view each.

pub mod city_map;
pub mod forecast_buckets;
pub mod forecast_view;
pub mod map_loader;
pub mod optimization;
pub mod overview;
pub mod palette;
pub mod registry;

pub use city_map::compute_city_map_data;
pub use forecast_buckets::bucket_forecast;
pub use forecast_view::ForecastPanel;
pub use map_loader::{load_city_map, CityMapLoad, CityMapPanel};
pub use optimization::{OptimizationForm, OptimizationPanel, OptimizationPhase};
pub use overview::{load_dashboard_summary, summary_cards, RiskPanel};
pub use palette::color_buckets;
pub use registry::{BuildingRegistry, RegistrationForm};
