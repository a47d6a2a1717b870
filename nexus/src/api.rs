//! Public API surface of the dashboard pipeline.
//!
//! This file consolidates the backend entities and the view models.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    Building, BuildingId, BuildingType, DashboardSummary, EnergyIntensitySample, ForecastPoint,
    InstitutionId, InstitutionRisk, NewBuilding, Objective, OptimizationMode,
    OptimizationRequest, OptimizationResult, ScheduleItem, Tariffs, DEFAULT_HORIZON_HOURS,
};

pub use crate::routes::city_map::CityMapData;
pub use crate::routes::city_map::GeoPoint;
pub use crate::routes::city_map::MapMarker;
pub use crate::routes::city_map::TypeColorInfo;
pub use crate::routes::forecast::ChartSlice;
pub use crate::routes::forecast::DayPeriod;
pub use crate::routes::forecast::ForecastBucket;
pub use crate::routes::forecast::ForecastRow;
pub use crate::routes::forecast::ForecastViewData;
pub use crate::routes::optimization::MetricEntry;
pub use crate::routes::optimization::OptimizationView;
pub use crate::routes::optimization::ScheduleRow;
pub use crate::routes::overview::MetricCard;
pub use crate::routes::overview::RiskView;
pub use crate::routes::registry::BuildingListData;
pub use crate::routes::registry::BuildingRow;
pub use crate::routes::state::ViewState;
