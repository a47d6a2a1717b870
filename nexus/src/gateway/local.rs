//! In-memory local gateway implementation.
//!
//! Stores seeded backend data in memory, suitable for unit testing and offline
//! development. Any operation can be made to fail with a chosen
//! [`RemoteError`], and every call is counted so tests can assert that a
//! request was (or was not) issued.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Barrier;

use super::error::{GatewayOperation, RemoteError, RemoteResult};
use super::traits::{
    AnalyticsGateway, CityGateway, EducationGateway, EnergyGateway, OptimizationGateway,
};
use crate::models::{
    Building, BuildingId, DashboardSummary, EnergyIntensitySample, ForecastPoint,
    InstitutionId, InstitutionRisk, NewBuilding, OptimizationRequest, OptimizationResult,
};

/// Test-double default: risk level above which a seeded institution is
/// counted in the fallback summary. Not a backend rule.
const FALLBACK_AT_RISK_THRESHOLD: f64 = 0.5;
/// Test-double default savings figure of the fallback summary.
const FALLBACK_SAVINGS_PERCENT: f64 = 15.0;

/// In-memory gateway.
///
/// # Example
/// ```
/// use nexus_dashboard::gateway::{CityGateway, LocalGateway};
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let gateway = LocalGateway::new();
/// let buildings = runtime.block_on(gateway.list_buildings()).unwrap();
/// assert!(buildings.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct LocalGateway {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    buildings: Vec<Building>,
    forecasts: HashMap<BuildingId, Vec<ForecastPoint>>,
    intensity: Vec<EnergyIntensitySample>,
    risks: HashMap<InstitutionId, InstitutionRisk>,
    optimization_results: HashMap<BuildingId, OptimizationResult>,
    summary: Option<DashboardSummary>,

    failures: HashMap<GatewayOperation, RemoteError>,
    rendezvous: HashMap<GatewayOperation, Arc<Barrier>>,
    calls: HashMap<GatewayOperation, usize>,
    optimize_requests: Vec<OptimizationRequest>,
    registrations: Vec<NewBuilding>,

    next_building_id: i64,
}

impl LocalGateway {
    /// Create a new empty local gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a building as if it had been registered earlier.
    pub fn seed_building(&self, building: Building) {
        let mut data = self.data.write();
        data.next_building_id = data.next_building_id.max(building.id.value());
        data.buildings.push(building);
    }

    pub fn seed_forecast(&self, building_id: BuildingId, points: Vec<ForecastPoint>) {
        self.data.write().forecasts.insert(building_id, points);
    }

    pub fn seed_intensity(&self, samples: Vec<EnergyIntensitySample>) {
        self.data.write().intensity = samples;
    }

    pub fn seed_risk(&self, institution_id: InstitutionId, risk: InstitutionRisk) {
        self.data.write().risks.insert(institution_id, risk);
    }

    /// Result returned by `optimize` for requests on `building_id`.
    pub fn seed_optimization_result(&self, result: OptimizationResult) {
        self.data
            .write()
            .optimization_results
            .insert(result.building_id, result);
    }

    /// Summary returned verbatim by `get_dashboard_summary`.
    ///
    /// Without one, the gateway answers a fallback summary counting the
    /// seeded buildings and risks with the `FALLBACK_*` defaults above.
    pub fn seed_summary(&self, summary: DashboardSummary) {
        self.data.write().summary = Some(summary);
    }

    /// Make every subsequent call of `operation` fail with `error`.
    pub fn fail_operation(&self, operation: GatewayOperation, error: RemoteError) {
        self.data.write().failures.insert(operation, error);
    }

    /// Undo [`LocalGateway::fail_operation`].
    pub fn restore_operation(&self, operation: GatewayOperation) {
        self.data.write().failures.remove(&operation);
    }

    /// Hold calls of `operation` at `barrier` before answering.
    ///
    /// Giving two operations the same two-party barrier only lets them
    /// complete when both are in flight at once.
    pub fn rendezvous(&self, operation: GatewayOperation, barrier: Arc<Barrier>) {
        self.data.write().rendezvous.insert(operation, barrier);
    }

    /// Number of calls made to `operation`, failed ones included.
    pub fn call_count(&self, operation: GatewayOperation) -> usize {
        self.data.read().calls.get(&operation).copied().unwrap_or(0)
    }

    /// Optimization requests received so far, in order.
    pub fn optimize_requests(&self) -> Vec<OptimizationRequest> {
        self.data.read().optimize_requests.clone()
    }

    /// Registration payloads received so far, in order.
    pub fn registrations(&self) -> Vec<NewBuilding> {
        self.data.read().registrations.clone()
    }

    /// Count the call, wait at the rendezvous if any, then report an injected
    /// failure if one is set.
    async fn enter(&self, operation: GatewayOperation) -> RemoteResult<()> {
        let barrier = {
            let mut data = self.data.write();
            *data.calls.entry(operation).or_insert(0) += 1;
            data.rendezvous.get(&operation).cloned()
        };

        if let Some(barrier) = barrier {
            barrier.wait().await;
        }

        match self.data.read().failures.get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CityGateway for LocalGateway {
    async fn list_buildings(&self) -> RemoteResult<Vec<Building>> {
        self.enter(GatewayOperation::ListBuildings).await?;
        Ok(self.data.read().buildings.clone())
    }

    async fn register_building(&self, building: &NewBuilding) -> RemoteResult<Building> {
        self.enter(GatewayOperation::RegisterBuilding).await?;

        let mut data = self.data.write();
        data.registrations.push(building.clone());
        data.next_building_id += 1;

        let stored = Building {
            id: BuildingId::new(data.next_building_id),
            name: building.name.clone(),
            building_type: building.building_type.clone(),
            latitude: building.latitude,
            longitude: building.longitude,
            city_zone: building.city_zone.clone(),
        };
        data.buildings.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl EnergyGateway for LocalGateway {
    async fn get_forecast(
        &self,
        building_id: BuildingId,
        horizon_hours: u32,
    ) -> RemoteResult<Vec<ForecastPoint>> {
        self.enter(GatewayOperation::GetForecast).await?;

        let data = self.data.read();
        let points = data
            .forecasts
            .get(&building_id)
            .map(|points| {
                points
                    .iter()
                    .filter(|p| p.horizon_hours <= i64::from(horizon_hours))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(points)
    }

    async fn get_intensity(&self) -> RemoteResult<Vec<EnergyIntensitySample>> {
        self.enter(GatewayOperation::GetIntensity).await?;
        Ok(self.data.read().intensity.clone())
    }
}

#[async_trait]
impl EducationGateway for LocalGateway {
    async fn get_institution_risk(
        &self,
        institution_id: InstitutionId,
    ) -> RemoteResult<InstitutionRisk> {
        self.enter(GatewayOperation::GetInstitutionRisk).await?;

        self.data
            .read()
            .risks
            .get(&institution_id)
            .cloned()
            .ok_or_else(|| {
                RemoteError::status(
                    GatewayOperation::GetInstitutionRisk,
                    404,
                    Some("Institution not found".to_string()),
                )
            })
    }
}

#[async_trait]
impl OptimizationGateway for LocalGateway {
    async fn optimize(&self, request: &OptimizationRequest) -> RemoteResult<OptimizationResult> {
        self.enter(GatewayOperation::Optimize).await?;

        let mut data = self.data.write();
        data.optimize_requests.push(request.clone());
        data.optimization_results
            .get(&request.building_id)
            .cloned()
            .ok_or_else(|| {
                RemoteError::status(
                    GatewayOperation::Optimize,
                    400,
                    Some("No forecast data available for this building.".to_string()),
                )
            })
    }
}

#[async_trait]
impl AnalyticsGateway for LocalGateway {
    async fn get_dashboard_summary(&self) -> RemoteResult<DashboardSummary> {
        self.enter(GatewayOperation::GetDashboardSummary).await?;

        let data = self.data.read();
        if let Some(ref summary) = data.summary {
            return Ok(summary.clone());
        }

        // Fallback for tests that never seed a summary.
        let at_risk = data
            .risks
            .values()
            .filter(|r| r.risk_level > FALLBACK_AT_RISK_THRESHOLD)
            .count();
        Ok(DashboardSummary {
            monitored_buildings: data.buildings.len() as i64,
            avg_daily_energy_kwh: 0.0,
            at_risk_institutions: at_risk as i64,
            potential_energy_savings_percent: FALLBACK_SAVINGS_PERCENT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BuildingType;

    fn new_building(name: &str) -> NewBuilding {
        NewBuilding {
            name: name.to_string(),
            building_type: BuildingType::Office,
            latitude: Some(12.9),
            longitude: Some(77.6),
            city_zone: None,
        }
    }

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let gateway = LocalGateway::new();
        let first = gateway.register_building(&new_building("A")).await.unwrap();
        let second = gateway.register_building(&new_building("B")).await.unwrap();

        assert_eq!(first.id, BuildingId::new(1));
        assert_eq!(second.id, BuildingId::new(2));
        assert_eq!(gateway.list_buildings().await.unwrap().len(), 2);
        assert_eq!(gateway.registrations().len(), 2);
    }

    #[tokio::test]
    async fn test_register_after_seed_skips_seeded_ids() {
        let gateway = LocalGateway::new();
        gateway.seed_building(Building {
            id: BuildingId::new(10),
            name: "Seeded".to_string(),
            building_type: BuildingType::School,
            latitude: None,
            longitude: None,
            city_zone: None,
        });

        let created = gateway.register_building(&new_building("C")).await.unwrap();
        assert_eq!(created.id, BuildingId::new(11));
    }

    #[tokio::test]
    async fn test_injected_failure_and_restore() {
        let gateway = LocalGateway::new();
        gateway.fail_operation(
            GatewayOperation::ListBuildings,
            RemoteError::status(GatewayOperation::ListBuildings, 500, None),
        );

        let err = gateway.list_buildings().await.unwrap_err();
        assert_eq!(err.status, Some(500));

        gateway.restore_operation(GatewayOperation::ListBuildings);
        assert!(gateway.list_buildings().await.is_ok());
        assert_eq!(gateway.call_count(GatewayOperation::ListBuildings), 2);
    }

    #[tokio::test]
    async fn test_forecast_respects_horizon() {
        let gateway = LocalGateway::new();
        let points = (1..=24)
            .map(|h| ForecastPoint {
                building_id: BuildingId::new(1),
                horizon_hours: h,
                timestamp: format!("t{}", h),
                predicted_value: 1.0,
            })
            .collect();
        gateway.seed_forecast(BuildingId::new(1), points);

        assert_eq!(gateway.get_forecast(BuildingId::new(1), 6).await.unwrap().len(), 6);
        assert!(gateway.get_forecast(BuildingId::new(2), 24).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_institution_is_not_found() {
        let gateway = LocalGateway::new();
        let err = gateway
            .get_institution_risk(InstitutionId::new(3))
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message(), "Institution not found");
    }

    #[tokio::test]
    async fn test_derived_summary_counts_buildings_and_risks() {
        let gateway = LocalGateway::new();
        gateway.register_building(&new_building("A")).await.unwrap();
        gateway.seed_risk(
            InstitutionId::new(1),
            InstitutionRisk {
                institution_id: Some(InstitutionId::new(1)),
                risk_level: 0.8,
                notes: None,
                timestamp: "2024-01-01T00:00:00".to_string(),
            },
        );

        let summary = gateway.get_dashboard_summary().await.unwrap();
        assert_eq!(summary.monitored_buildings, 1);
        assert_eq!(summary.at_risk_institutions, 1);
    }

    #[tokio::test]
    async fn test_seeded_summary_is_returned_verbatim() {
        let gateway = LocalGateway::new();
        gateway.register_building(&new_building("A")).await.unwrap();
        let seeded = DashboardSummary {
            monitored_buildings: 42,
            avg_daily_energy_kwh: 310.5,
            at_risk_institutions: 0,
            potential_energy_savings_percent: 9.0,
        };
        gateway.seed_summary(seeded.clone());

        assert_eq!(gateway.get_dashboard_summary().await.unwrap(), seeded);
    }
}
