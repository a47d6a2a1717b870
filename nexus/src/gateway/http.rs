//! reqwest-backed gateway against the live backend.

use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;

use super::config::GatewayConfig;
use super::error::{GatewayOperation, RemoteError, RemoteResult};
use super::traits::{
    AnalyticsGateway, CityGateway, EducationGateway, EnergyGateway, OptimizationGateway,
};
use crate::error::ConfigError;
use crate::models::{
    Building, BuildingId, DashboardSummary, EnergyIntensitySample, ForecastPoint,
    InstitutionId, InstitutionRisk, NewBuilding, OptimizationRequest, OptimizationResult,
};

pub const BUILDINGS_PATH: &str = "/city/buildings";
pub const FORECAST_PATH: &str = "/energy/forecast";
pub const INTENSITY_PATH: &str = "/energy/intensity";
pub const INSTITUTION_RISK_PATH: &str = "/education/risk";
pub const OPTIMIZE_PATH: &str = "/optimize/energy";
pub const DASHBOARD_SUMMARY_PATH: &str = "/analytics/dashboard-summary";

/// Gateway issuing one HTTP round trip per operation.
///
/// No retries. Each request is bounded by the configured timeout and a
/// timed-out request surfaces as a [`RemoteError`] without status.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ConfigError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: GatewayOperation,
        request: reqwest::RequestBuilder,
    ) -> RemoteResult<T> {
        let result = self.round_trip(operation, request).await;
        if let Err(ref e) = result {
            error!("{}", e);
        }
        result
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        operation: GatewayOperation,
        request: reqwest::RequestBuilder,
    ) -> RemoteResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| classify_reqwest_error(operation, e))?;

        let status = response.status();
        debug!("{} answered {}", operation, status);

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(operation, e))?;

        if !status.is_success() {
            return Err(RemoteError::status(
                operation,
                status.as_u16(),
                extract_detail(&body),
            ));
        }

        serde_json::from_slice(&body)
            .map_err(|e| RemoteError::decode(operation, status.as_u16(), e.to_string()))
    }
}

fn classify_reqwest_error(operation: GatewayOperation, err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::timeout(operation, err.to_string())
    } else {
        RemoteError::transport(operation, err.to_string())
    }
}

/// `detail` string of an error body, if the body is JSON and carries one.
///
/// Structured details (e.g. validation error lists) are not surfaced.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl CityGateway for HttpGateway {
    async fn list_buildings(&self) -> RemoteResult<Vec<Building>> {
        let request = self.client.get(self.url(BUILDINGS_PATH));
        self.send(GatewayOperation::ListBuildings, request).await
    }

    async fn register_building(&self, building: &NewBuilding) -> RemoteResult<Building> {
        let request = self.client.post(self.url(BUILDINGS_PATH)).json(building);
        self.send(GatewayOperation::RegisterBuilding, request).await
    }
}

#[async_trait]
impl EnergyGateway for HttpGateway {
    async fn get_forecast(
        &self,
        building_id: BuildingId,
        horizon_hours: u32,
    ) -> RemoteResult<Vec<ForecastPoint>> {
        let request = self
            .client
            .get(self.url(&format!("{}/{}", FORECAST_PATH, building_id)))
            .query(&[("horizon_hours", horizon_hours)]);
        self.send(GatewayOperation::GetForecast, request).await
    }

    async fn get_intensity(&self) -> RemoteResult<Vec<EnergyIntensitySample>> {
        let request = self.client.get(self.url(INTENSITY_PATH));
        self.send(GatewayOperation::GetIntensity, request).await
    }
}

#[async_trait]
impl EducationGateway for HttpGateway {
    async fn get_institution_risk(
        &self,
        institution_id: InstitutionId,
    ) -> RemoteResult<InstitutionRisk> {
        let request = self
            .client
            .get(self.url(&format!("{}/{}", INSTITUTION_RISK_PATH, institution_id)));
        self.send(GatewayOperation::GetInstitutionRisk, request).await
    }
}

#[async_trait]
impl OptimizationGateway for HttpGateway {
    async fn optimize(&self, request: &OptimizationRequest) -> RemoteResult<OptimizationResult> {
        let http_request = self.client.post(self.url(OPTIMIZE_PATH)).json(request);
        self.send(GatewayOperation::Optimize, http_request).await
    }
}

#[async_trait]
impl AnalyticsGateway for HttpGateway {
    async fn get_dashboard_summary(&self) -> RemoteResult<DashboardSummary> {
        let request = self.client.get(self.url(DASHBOARD_SUMMARY_PATH));
        self.send(GatewayOperation::GetDashboardSummary, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        let body = br#"{"detail": "Building not found"}"#;
        assert_eq!(extract_detail(body), Some("Building not found".to_string()));
    }

    #[test]
    fn test_extract_detail_ignores_structured_detail() {
        let body = br#"{"detail": [{"loc": ["body", "hours"], "msg": "field required"}]}"#;
        assert_eq!(extract_detail(body), None);
    }

    #[test]
    fn test_extract_detail_non_json_body() {
        assert_eq!(extract_detail(b"Internal Server Error"), None);
        assert_eq!(extract_detail(b""), None);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = GatewayConfig {
            base_url: "http://localhost:8000/api/v1/".to_string(),
            ..GatewayConfig::default()
        };
        let gateway = HttpGateway::new(&config).unwrap();
        assert_eq!(
            gateway.url(BUILDINGS_PATH),
            "http://localhost:8000/api/v1/city/buildings"
        );
    }
}
