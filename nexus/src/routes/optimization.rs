use serde::{Deserialize, Serialize};

use crate::models::{BuildingId, OptimizationMode};

/// Labelled figure of the optimization summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub label: String,
    pub value: String,
}

/// One row of the optimized schedule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based display hour.
    pub hour: i64,
    pub timestamp: String,
    pub baseline_kw: String,
    pub optimized_kw: String,
}

/// Optimization result as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationView {
    pub title: String,
    pub subtitle: String,
    pub building_id: BuildingId,
    pub mode: OptimizationMode,
    pub hours: i64,
    pub metrics: Vec<MetricEntry>,
    pub rows: Vec<ScheduleRow>,
    pub total_baseline_kwh: f64,
    pub total_optimized_kwh: f64,
    /// Baseline minus optimized energy over the horizon.
    pub energy_delta_kwh: f64,
    /// Baseline peak minus optimized peak; 0 for an empty schedule.
    pub peak_reduction_kw: f64,
}

/// View name constant
pub const OPTIMIZE_VIEW: &str = "optimize";
