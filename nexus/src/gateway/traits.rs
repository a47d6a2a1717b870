//! Gateway trait definitions for backend operations.
//!
//! Operations are split by backend area so that implementations and test
//! doubles stay focused. [`DashboardGateway`] is the composite bound used by
//! the service layer.

use async_trait::async_trait;

use super::error::RemoteResult;
use crate::models::{
    Building, BuildingId, DashboardSummary, EnergyIntensitySample, ForecastPoint,
    InstitutionId, InstitutionRisk, NewBuilding, OptimizationRequest, OptimizationResult,
};

/// Building registry operations (`/city/buildings`).
#[async_trait]
pub trait CityGateway: Send + Sync {
    /// List every registered building.
    async fn list_buildings(&self) -> RemoteResult<Vec<Building>>;

    /// Register a building and return it as stored by the backend.
    async fn register_building(&self, building: &NewBuilding) -> RemoteResult<Building>;
}

/// Energy data operations (`/energy/*`).
#[async_trait]
pub trait EnergyGateway: Send + Sync {
    /// Hourly forecast for one building over `horizon_hours`.
    async fn get_forecast(
        &self,
        building_id: BuildingId,
        horizon_hours: u32,
    ) -> RemoteResult<Vec<ForecastPoint>>;

    /// Trailing 24h consumption per building.
    async fn get_intensity(&self) -> RemoteResult<Vec<EnergyIntensitySample>>;
}

/// Education analytics (`/education/risk/{id}`).
#[async_trait]
pub trait EducationGateway: Send + Sync {
    async fn get_institution_risk(
        &self,
        institution_id: InstitutionId,
    ) -> RemoteResult<InstitutionRisk>;
}

/// Schedule optimization (`/optimize/energy`).
#[async_trait]
pub trait OptimizationGateway: Send + Sync {
    async fn optimize(&self, request: &OptimizationRequest) -> RemoteResult<OptimizationResult>;
}

/// City-wide counters (`/analytics/dashboard-summary`).
#[async_trait]
pub trait AnalyticsGateway: Send + Sync {
    async fn get_dashboard_summary(&self) -> RemoteResult<DashboardSummary>;
}

/// Composite trait bound for a complete gateway implementation.
///
/// Automatically implemented for any type implementing all five traits.
pub trait DashboardGateway:
    CityGateway + EnergyGateway + EducationGateway + OptimizationGateway + AnalyticsGateway
{
}

impl<T> DashboardGateway for T where
    T: CityGateway + EnergyGateway + EducationGateway + OptimizationGateway + AnalyticsGateway
{
}
