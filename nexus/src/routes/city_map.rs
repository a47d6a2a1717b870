use serde::{Deserialize, Serialize};

use crate::models::{BuildingId, BuildingType};

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Legend entry for one building type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeColorInfo {
    pub label: String,
    pub color: String,
}

/// Circle marker of one geolocated building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub building_id: BuildingId,
    pub name: String,
    pub building_type: BuildingType,
    pub position: GeoPoint,
    pub radius: f64,
    pub color: String,
    pub total_kwh_24h: Option<f64>,
    pub popup: Vec<String>,
}

/// City map visualization data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMapData {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    pub legend: Vec<TypeColorInfo>,
    pub max_intensity: f64,
    pub total_buildings: usize,
    pub mapped_buildings: usize,
    /// Energy intensity could not be loaded; every marker has the base radius.
    pub degraded: bool,
}

/// View name constant
pub const CITY_MAP_VIEW: &str = "map";
