//! Forecast page: on-demand fetch, forecast table and bucketed chart.

use log::error;
use serde::Serialize;

use crate::api::{
    BuildingId, ForecastBucket, ForecastPoint, ForecastRow, ForecastViewData,
    DEFAULT_HORIZON_HOURS,
};
use crate::error::{PipelineError, ValidationError};
use crate::gateway::EnergyGateway;
use crate::services::forecast_buckets::bucket_forecast;
use crate::services::palette::{color_buckets, LEGEND_NOTE};

pub const INVALID_BUILDING_ID_MESSAGE: &str = "Building ID must be a whole number.";

/// Forecast page state for one building at a time.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPanel {
    horizon_hours: u32,
    building_id: Option<BuildingId>,
    points: Vec<ForecastPoint>,
}

impl Default for ForecastPanel {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_HOURS)
    }
}

impl ForecastPanel {
    pub fn new(horizon_hours: u32) -> Self {
        Self {
            horizon_hours,
            building_id: None,
            points: Vec::new(),
        }
    }

    pub fn horizon_hours(&self) -> u32 {
        self.horizon_hours
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Fetch the forecast of `building_id` as typed.
    ///
    /// Empty input does nothing. Any failure leaves the panel empty.
    pub async fn fetch<G>(&mut self, gateway: &G, building_id: &str) -> Result<(), PipelineError>
    where
        G: EnergyGateway + ?Sized,
    {
        let raw = building_id.trim();
        if raw.is_empty() {
            return Ok(());
        }

        let Ok(id) = raw.parse::<i64>() else {
            self.clear();
            return Err(ValidationError::new(INVALID_BUILDING_ID_MESSAGE).into());
        };
        let id = BuildingId::new(id);

        match gateway.get_forecast(id, self.horizon_hours).await {
            Ok(points) => {
                self.building_id = Some(id);
                self.points = points;
                Ok(())
            }
            Err(err) => {
                error!("Failed to fetch forecast for building {}: {}", id, err);
                self.clear();
                Err(err.into())
            }
        }
    }

    fn clear(&mut self) {
        self.building_id = None;
        self.points.clear();
    }

    pub fn buckets(&self) -> Vec<ForecastBucket> {
        bucket_forecast(&self.points)
    }

    pub fn rows(&self) -> Vec<ForecastRow> {
        self.points
            .iter()
            .map(|p| ForecastRow {
                horizon_hours: p.horizon_hours,
                timestamp: p.timestamp.clone(),
                predicted_kwh: format!("{:.2}", p.predicted_value),
            })
            .collect()
    }

    /// Table and chart, recomputed from the stored points.
    pub fn view(&self) -> ForecastViewData {
        ForecastViewData {
            building_id: self.building_id,
            horizon_hours: self.horizon_hours,
            rows: self.rows(),
            slices: color_buckets(&self.buckets()),
            legend_note: LEGEND_NOTE.to_string(),
        }
    }
}

#[cfg(all(test, feature = "local-gateway"))]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::gateway::{GatewayOperation, LocalGateway};

    fn gateway_with_forecast() -> LocalGateway {
        let gateway = LocalGateway::new();
        let points = (1..=24)
            .map(|h| ForecastPoint {
                building_id: BuildingId::new(5),
                horizon_hours: h,
                timestamp: format!("2024-05-01T{:02}:00:00", h - 1),
                predicted_value: if h <= 6 { 1.0 } else { 2.5 },
            })
            .collect();
        gateway.seed_forecast(BuildingId::new(5), points);
        gateway
    }

    #[tokio::test]
    async fn test_empty_id_is_a_no_op() {
        let gateway = gateway_with_forecast();
        let mut panel = ForecastPanel::default();

        panel.fetch(&gateway, "  ").await.unwrap();
        assert_eq!(gateway.call_count(GatewayOperation::GetForecast), 0);
        assert!(panel.view().rows.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_builds_table_and_chart() {
        let gateway = gateway_with_forecast();
        let mut panel = ForecastPanel::default();
        panel.fetch(&gateway, "5").await.unwrap();

        let view = panel.view();
        assert_eq!(view.building_id, Some(BuildingId::new(5)));
        assert_eq!(view.rows.len(), 24);
        assert_eq!(view.rows[0].predicted_kwh, "1.00");

        let values: Vec<f64> = view.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![6.0, 15.0, 15.0, 15.0]);
        assert_eq!(view.slices[0].color, "#065f46");
        assert_eq!(view.slices[1].color, "#ff4d4d");
        assert!(view.legend_note.starts_with("Colours show"));
    }

    #[tokio::test]
    async fn test_failure_clears_previous_data() {
        let gateway = gateway_with_forecast();
        let mut panel = ForecastPanel::default();
        panel.fetch(&gateway, "5").await.unwrap();

        gateway.fail_operation(
            GatewayOperation::GetForecast,
            RemoteError::status(GatewayOperation::GetForecast, 500, None),
        );
        assert!(panel.fetch(&gateway, "5").await.is_err());
        assert!(panel.points().is_empty());
        assert!(panel.view().slices.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_never_reaches_gateway() {
        let gateway = gateway_with_forecast();
        let mut panel = ForecastPanel::default();

        let err = panel.fetch(&gateway, "five").await.unwrap_err();
        assert_eq!(err.user_message(""), INVALID_BUILDING_ID_MESSAGE);
        assert_eq!(gateway.call_count(GatewayOperation::GetForecast), 0);
    }
}
