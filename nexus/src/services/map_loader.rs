//! Concurrent loading of the two sources behind the city map.
//!
//! Buildings are the primary source: without them there is no map. Energy
//! intensity only sizes the markers, so its failure degrades the view to
//! uniform radii instead of failing it.

use futures::future;
use log::{debug, error, warn};
use serde::Serialize;

use crate::api::{CityMapData, EnergyIntensitySample, ViewState};
use crate::error::{DegradedDataError, RemoteError};
use crate::gateway::{CityGateway, EnergyGateway, RemoteResult};
use crate::services::city_map::compute_city_map_data;

/// Message shown when the building list cannot be loaded for the map.
pub const MAP_LOAD_FAILURE_MESSAGE: &str = "Unable to load buildings. Check backend connection.";

/// Outcome of a successful map load.
#[derive(Debug, Clone)]
pub struct CityMapLoad {
    pub map: CityMapData,
    /// Set when the intensity source failed and was replaced with no data.
    pub degraded: Option<DegradedDataError>,
}

impl CityMapLoad {
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Replace a failed secondary fetch with an empty collection.
fn tolerate_intensity(
    result: RemoteResult<Vec<EnergyIntensitySample>>,
) -> (Vec<EnergyIntensitySample>, Option<DegradedDataError>) {
    match result {
        Ok(samples) => (samples, None),
        Err(cause) => {
            let degraded = DegradedDataError {
                source_name: "energy intensity",
                cause,
            };
            warn!("{}", degraded);
            (Vec::new(), Some(degraded))
        }
    }
}

/// Fetch buildings and intensity concurrently and compute the map.
///
/// Both requests are in flight at the same time. A buildings failure is
/// returned as is; an intensity failure is logged and the map is computed
/// with no intensity data.
pub async fn load_city_map<G>(gateway: &G) -> Result<CityMapLoad, RemoteError>
where
    G: CityGateway + EnergyGateway + ?Sized,
{
    let (buildings, intensity) =
        future::join(gateway.list_buildings(), gateway.get_intensity()).await;

    let buildings = buildings?;
    let (samples, degraded) = tolerate_intensity(intensity);

    let mut map = compute_city_map_data(&buildings, &samples);
    map.degraded = degraded.is_some();
    debug!(
        "city map: {} of {} buildings mapped, max intensity {}",
        map.mapped_buildings, map.total_buildings, map.max_intensity
    );

    Ok(CityMapLoad { map, degraded })
}

/// City map view holding the outcome of the last load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CityMapPanel {
    pub state: ViewState<CityMapData>,
}

impl CityMapPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the map, replacing the previous state wholesale.
    pub async fn load<G>(&mut self, gateway: &G) -> &ViewState<CityMapData>
    where
        G: CityGateway + EnergyGateway + ?Sized,
    {
        self.state = match load_city_map(gateway).await {
            Ok(load) => ViewState::Ready(load.map),
            Err(err) => {
                error!("Failed to load city map: {}", err);
                ViewState::Failed(MAP_LOAD_FAILURE_MESSAGE.to_string())
            }
        };
        &self.state
    }
}
