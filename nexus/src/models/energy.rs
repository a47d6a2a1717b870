use serde::{Deserialize, Serialize};

use super::building::{BuildingId, BuildingType};

/// Default forecast horizon requested from `GET /energy/forecast/{id}`.
pub const DEFAULT_HORIZON_HOURS: u32 = 24;

/// One predicted hourly value for a building.
///
/// The backend orders points by `horizon_hours` and emits at most one point
/// per horizon, but neither property is relied upon here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub building_id: BuildingId,
    pub horizon_hours: i64,
    pub timestamp: String,
    /// Predicted consumption in kWh.
    #[serde(default)]
    pub predicted_value: f64,
}

/// Trailing 24h consumption of a building, from `GET /energy/intensity`.
///
/// Only `building_id` and `total_kwh_24h` drive the map; the descriptive
/// fields are echoed by the backend and kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyIntensitySample {
    pub building_id: BuildingId,
    #[serde(default)]
    pub total_kwh_24h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub building_type: Option<BuildingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_zone: Option<String>,
}

impl EnergyIntensitySample {
    pub fn new(building_id: impl Into<BuildingId>, total_kwh_24h: f64) -> Self {
        Self {
            building_id: building_id.into(),
            total_kwh_24h,
            name: None,
            building_type: None,
            latitude: None,
            longitude: None,
            city_zone: None,
        }
    }
}

/// City-wide counters from `GET /analytics/dashboard-summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub monitored_buildings: i64,
    pub avg_daily_energy_kwh: f64,
    pub at_risk_institutions: i64,
    pub potential_energy_savings_percent: f64,
}
