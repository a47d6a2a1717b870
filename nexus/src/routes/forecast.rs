use serde::{Deserialize, Serialize};

use crate::models::BuildingId;

/// Daily period covered by one forecast bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayPeriod {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayPeriod::Night => "Night",
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
        }
    }

    /// Chart label, e.g. `Hours 1–6 (Night)`.
    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Night => "Hours 1–6 (Night)",
            DayPeriod::Morning => "Hours 7–12 (Morning)",
            DayPeriod::Afternoon => "Hours 13–18 (Afternoon)",
            DayPeriod::Evening => "Hours 19–24 (Evening)",
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated predicted consumption of one daily period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBucket {
    pub period: DayPeriod,
    pub name: String,
    /// Total kWh, rounded to two decimals.
    pub value: f64,
}

/// A bucket ready for the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub period: DayPeriod,
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// One row of the forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub horizon_hours: i64,
    pub timestamp: String,
    /// Predicted kWh with two decimals.
    pub predicted_kwh: String,
}

/// Forecast table and chart for one building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastViewData {
    pub building_id: Option<BuildingId>,
    pub horizon_hours: u32,
    pub rows: Vec<ForecastRow>,
    pub slices: Vec<ChartSlice>,
    pub legend_note: String,
}

/// View name constant
pub const FORECAST_VIEW: &str = "forecast";
