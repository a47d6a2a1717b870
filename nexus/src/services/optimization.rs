//! Optimization workflow: form validation, request building, result view.
//!
//! ```text
//! Idle ──submit──▶ Validating ──ok──▶ Requesting ──▶ Succeeded
//!                      │                   │
//!                      └──invalid──▶ Failed ◀──remote error
//! ```
//!
//! Every submission starts from `Idle` and clears the previous result, so a
//! failed attempt never leaves an earlier schedule on screen.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::api::{
    BuildingId, MetricEntry, Objective, OptimizationMode, OptimizationRequest, OptimizationResult,
    OptimizationView, ScheduleRow, Tariffs,
};
use crate::error::{PipelineError, ValidationError};
use crate::gateway::OptimizationGateway;

pub const MISSING_INPUT_MESSAGE: &str = "Please provide Building ID and Max Load (kW).";
pub const NON_NUMERIC_MESSAGE: &str = "Building ID, Max Load, Hours and tariffs must be numeric.";
pub const MAX_LOAD_RANGE_MESSAGE: &str = "Max Load (kW) must be greater than zero.";
pub const HOURS_RANGE_MESSAGE: &str = "Hours must be between 1 and 48.";
pub const TARIFF_RANGE_MESSAGE: &str = "Day and night tariffs must be greater than zero.";
pub const OPTIMIZE_FAILURE_MESSAGE: &str =
    "Failed to compute optimized schedule. Check backend logs.";

pub const DEFAULT_HOURS: &str = "24";
pub const DEFAULT_DAY_TARIFF: &str = "8";
pub const DEFAULT_NIGHT_TARIFF: &str = "5";

/// Planning window accepted by the optimizer, in hours.
pub const HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=48;

/// Optimization inputs as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationForm {
    pub building_id: String,
    pub max_load_kw: String,
    pub hours: String,
    pub mode: OptimizationMode,
    /// Only read in cost mode.
    pub day_tariff: String,
    pub night_tariff: String,
}

impl Default for OptimizationForm {
    fn default() -> Self {
        Self {
            building_id: String::new(),
            max_load_kw: String::new(),
            hours: DEFAULT_HOURS.to_string(),
            mode: OptimizationMode::Peak,
            day_tariff: DEFAULT_DAY_TARIFF.to_string(),
            night_tariff: DEFAULT_NIGHT_TARIFF.to_string(),
        }
    }
}

impl OptimizationForm {
    /// Build the request, or the message explaining why it cannot be sent.
    pub fn validate(&self) -> Result<OptimizationRequest, ValidationError> {
        let building_id = self.building_id.trim();
        let max_load = self.max_load_kw.trim();
        if building_id.is_empty() || max_load.is_empty() {
            return Err(ValidationError::new(MISSING_INPUT_MESSAGE));
        }

        let non_numeric = || ValidationError::new(NON_NUMERIC_MESSAGE);
        let building_id = parse_integral(building_id).ok_or_else(non_numeric)?;
        let max_load_kw = parse_number(max_load).ok_or_else(non_numeric)?;
        let hours = match self.hours.trim() {
            "" => parse_integral(DEFAULT_HOURS),
            raw => parse_integral(raw),
        }
        .ok_or_else(non_numeric)?;

        if max_load_kw <= 0.0 {
            return Err(ValidationError::new(MAX_LOAD_RANGE_MESSAGE));
        }
        if !HOURS_RANGE.contains(&hours) {
            return Err(ValidationError::new(HOURS_RANGE_MESSAGE));
        }

        let objective = match self.mode {
            OptimizationMode::Peak => Objective::Peak,
            OptimizationMode::Emissions => Objective::Emissions,
            OptimizationMode::Cost => {
                let day_tariff = parse_number(self.day_tariff.trim()).ok_or_else(non_numeric)?;
                let night_tariff =
                    parse_number(self.night_tariff.trim()).ok_or_else(non_numeric)?;
                if day_tariff <= 0.0 || night_tariff <= 0.0 {
                    return Err(ValidationError::new(TARIFF_RANGE_MESSAGE));
                }
                Objective::Cost(Tariffs {
                    day_tariff,
                    night_tariff,
                })
            }
        };

        Ok(OptimizationRequest {
            building_id: BuildingId::new(building_id),
            max_load_kw,
            hours,
            objective,
        })
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole number, also accepting an integral decimal such as `3.0`.
fn parse_integral(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = parse_number(raw)?;
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Phase of the current optimization attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationPhase {
    #[default]
    Idle,
    Validating,
    Requesting,
    Succeeded,
    Failed,
}

/// Optimization page state: the form, the phase and the latest outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizationPanel {
    pub form: OptimizationForm,
    phase: OptimizationPhase,
    result: Option<OptimizationView>,
    error: Option<String>,
}

impl OptimizationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: OptimizationForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> OptimizationPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&OptimizationView> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn transition(&mut self, next: OptimizationPhase) {
        debug!("optimization {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.transition(OptimizationPhase::Failed);
    }

    /// Run one optimization attempt with the current form.
    ///
    /// Invalid input fails without calling the gateway. A remote failure
    /// shows the backend detail when there is one.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<&OptimizationView, PipelineError>
    where
        G: OptimizationGateway + ?Sized,
    {
        self.transition(OptimizationPhase::Idle);
        self.result = None;
        self.error = None;

        self.transition(OptimizationPhase::Validating);
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.fail(err.message().to_string());
                return Err(err.into());
            }
        };

        self.transition(OptimizationPhase::Requesting);
        match gateway.optimize(&request).await {
            Ok(result) => {
                self.transition(OptimizationPhase::Succeeded);
                Ok(&*self.result.insert(OptimizationView::from(result)))
            }
            Err(err) => {
                error!("Optimization failed for building {}: {}", request.building_id, err);
                self.fail(err.detail_or(OPTIMIZE_FAILURE_MESSAGE).to_string());
                Err(err.into())
            }
        }
    }
}

fn peak(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |max, v| match max {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

impl From<OptimizationResult> for OptimizationView {
    fn from(result: OptimizationResult) -> Self {
        let mut schedule = result.schedule;
        schedule.sort_by_key(|item| item.hour_index);

        let mut metrics = vec![
            MetricEntry {
                label: "Baseline Energy (24h)".to_string(),
                value: format!("{:.2} kWh", result.total_baseline_kwh),
            },
            MetricEntry {
                label: "Optimized Energy (24h)".to_string(),
                value: format!("{:.2} kWh", result.total_optimized_kwh),
            },
        ];
        let optional = [
            ("Cost (Baseline)", result.estimated_cost_baseline, "₹ ", ""),
            ("Cost (Optimized)", result.estimated_cost_optimized, "₹ ", ""),
            (
                "Emissions (Baseline)",
                result.estimated_emissions_baseline_kg,
                "",
                " kg CO₂",
            ),
            (
                "Emissions (Optimized)",
                result.estimated_emissions_optimized_kg,
                "",
                " kg CO₂",
            ),
        ];
        for (label, value, prefix, suffix) in optional {
            if let Some(value) = value {
                metrics.push(MetricEntry {
                    label: label.to_string(),
                    value: format!("{}{:.2}{}", prefix, value, suffix),
                });
            }
        }

        let baseline_peak = peak(schedule.iter().map(|s| s.baseline_kw));
        let optimized_peak = peak(schedule.iter().map(|s| s.optimized_kw));
        let peak_reduction_kw = match (baseline_peak, optimized_peak) {
            (Some(b), Some(o)) => b - o,
            _ => 0.0,
        };

        let rows = schedule
            .iter()
            .map(|item| ScheduleRow {
                hour: item.hour_index.saturating_add(1),
                timestamp: item.timestamp.clone(),
                baseline_kw: format!("{:.2}", item.baseline_kw),
                optimized_kw: format!("{:.2}", item.optimized_kw),
            })
            .collect();

        OptimizationView {
            title: format!("Optimized Schedule (Building {})", result.building_id),
            subtitle: format!("Mode: {} | Horizon: {} hours", result.mode, result.hours),
            building_id: result.building_id,
            mode: result.mode,
            hours: result.hours,
            metrics,
            rows,
            total_baseline_kwh: result.total_baseline_kwh,
            total_optimized_kwh: result.total_optimized_kwh,
            energy_delta_kwh: result.total_baseline_kwh - result.total_optimized_kwh,
            peak_reduction_kw,
        }
    }
}
