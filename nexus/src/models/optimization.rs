use serde::{Deserialize, Serialize};

use super::building::BuildingId;

/// Objective the backend optimizer minimizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationMode {
    #[default]
    Peak,
    Cost,
    Emissions,
}

impl OptimizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Peak => "peak",
            OptimizationMode::Cost => "cost",
            OptimizationMode::Emissions => "emissions",
        }
    }
}

impl std::str::FromStr for OptimizationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "peak" => Ok(Self::Peak),
            "cost" => Ok(Self::Cost),
            "emissions" => Ok(Self::Emissions),
            other => Err(format!("Unknown optimization mode: {}", other)),
        }
    }
}

impl std::fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day/night tariffs in currency units per kWh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariffs {
    pub day_tariff: f64,
    pub night_tariff: f64,
}

/// Optimization objective together with the parameters only it uses.
///
/// Tariffs exist only under [`Objective::Cost`], which is what keeps them out
/// of peak and emissions payloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Objective {
    Peak,
    Cost(Tariffs),
    Emissions,
}

impl Objective {
    pub fn mode(&self) -> OptimizationMode {
        match self {
            Objective::Peak => OptimizationMode::Peak,
            Objective::Cost(_) => OptimizationMode::Cost,
            Objective::Emissions => OptimizationMode::Emissions,
        }
    }

    pub fn tariffs(&self) -> Option<Tariffs> {
        match self {
            Objective::Cost(tariffs) => Some(*tariffs),
            _ => None,
        }
    }
}

/// Request body for `POST /optimize/energy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "OptimizationRequestWire", try_from = "OptimizationRequestWire")]
pub struct OptimizationRequest {
    pub building_id: BuildingId,
    pub max_load_kw: f64,
    pub hours: i64,
    pub objective: Objective,
}

impl OptimizationRequest {
    pub fn mode(&self) -> OptimizationMode {
        self.objective.mode()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct OptimizationRequestWire {
    building_id: BuildingId,
    max_load_kw: f64,
    hours: i64,
    mode: OptimizationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_tariff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    night_tariff: Option<f64>,
}

impl From<OptimizationRequest> for OptimizationRequestWire {
    fn from(request: OptimizationRequest) -> Self {
        let tariffs = request.objective.tariffs();
        Self {
            building_id: request.building_id,
            max_load_kw: request.max_load_kw,
            hours: request.hours,
            mode: request.objective.mode(),
            day_tariff: tariffs.map(|t| t.day_tariff),
            night_tariff: tariffs.map(|t| t.night_tariff),
        }
    }
}

impl TryFrom<OptimizationRequestWire> for OptimizationRequest {
    type Error = String;

    fn try_from(wire: OptimizationRequestWire) -> Result<Self, Self::Error> {
        let objective = match (wire.mode, wire.day_tariff, wire.night_tariff) {
            (OptimizationMode::Cost, Some(day_tariff), Some(night_tariff)) => {
                Objective::Cost(Tariffs {
                    day_tariff,
                    night_tariff,
                })
            }
            (OptimizationMode::Cost, _, _) => {
                return Err("cost mode requires day_tariff and night_tariff".to_string())
            }
            (mode, None, None) => match mode {
                OptimizationMode::Peak => Objective::Peak,
                _ => Objective::Emissions,
            },
            (mode, _, _) => {
                return Err(format!("tariffs are not accepted in {} mode", mode));
            }
        };

        Ok(Self {
            building_id: wire.building_id,
            max_load_kw: wire.max_load_kw,
            hours: wire.hours,
            objective,
        })
    }
}

/// One hour of the baseline vs. optimized load profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub hour_index: i64,
    pub timestamp: String,
    pub baseline_kw: f64,
    pub optimized_kw: f64,
}

/// Response body of `POST /optimize/energy`.
///
/// Cost estimates are only present for cost mode and emission estimates only
/// for emissions mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub building_id: BuildingId,
    pub hours: i64,
    pub mode: OptimizationMode,
    pub total_baseline_kwh: f64,
    pub total_optimized_kwh: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost_baseline: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost_optimized: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_emissions_baseline_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_emissions_optimized_kg: Option<f64>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}
