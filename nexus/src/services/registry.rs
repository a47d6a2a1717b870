//! Building registry: listing and the registration form.

use log::error;
use serde::{Deserialize, Serialize};

use crate::api::{Building, BuildingListData, BuildingRow, BuildingType, NewBuilding};
use crate::error::{PipelineError, RemoteError, ValidationError};
use crate::gateway::CityGateway;
use crate::services::city_map::DEFAULT_CENTER;

pub const LOAD_FAILURE_MESSAGE: &str = "Unable to load buildings. Check backend connection.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and type are required.";
pub const NON_NUMERIC_COORDINATES_MESSAGE: &str = "Latitude and longitude must be numeric.";
pub const REGISTER_FAILURE_MESSAGE: &str = "Failed to create building. Try again.";

/// Zone assigned when the form leaves it empty.
pub const DEFAULT_ZONE: &str = "Central";

/// Registration inputs as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub building_type: String,
    pub latitude: String,
    pub longitude: String,
    pub city_zone: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            building_type: BuildingType::School.as_str().to_string(),
            latitude: String::new(),
            longitude: String::new(),
            city_zone: String::new(),
        }
    }
}

impl RegistrationForm {
    /// Build the registration payload.
    ///
    /// Empty coordinates default to the map center and an empty zone to
    /// [`DEFAULT_ZONE`].
    pub fn validate(&self) -> Result<NewBuilding, ValidationError> {
        let name = self.name.trim();
        let building_type = self.building_type.trim();
        if name.is_empty() || building_type.is_empty() {
            return Err(ValidationError::new(REQUIRED_FIELDS_MESSAGE));
        }

        let latitude = parse_coordinate(&self.latitude, DEFAULT_CENTER.latitude)?;
        let longitude = parse_coordinate(&self.longitude, DEFAULT_CENTER.longitude)?;
        let city_zone = match self.city_zone.trim() {
            "" => DEFAULT_ZONE,
            zone => zone,
        };

        Ok(NewBuilding {
            name: name.to_string(),
            building_type: BuildingType::from(building_type),
            latitude: Some(latitude),
            longitude: Some(longitude),
            city_zone: Some(city_zone.to_string()),
        })
    }
}

fn parse_coordinate(raw: &str, default: f64) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::new(NON_NUMERIC_COORDINATES_MESSAGE))
}

/// Registry page state.
///
/// A failed reload keeps the previously listed buildings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildingRegistry {
    pub form: RegistrationForm,
    buildings: Vec<Building>,
    loading: bool,
    error: Option<String>,
}

impl BuildingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the listing with the backend's building list.
    pub async fn load<G>(&mut self, gateway: &G) -> Result<(), RemoteError>
    where
        G: CityGateway + ?Sized,
    {
        self.loading = true;
        let result = gateway.list_buildings().await;
        self.loading = false;

        match result {
            Ok(buildings) => {
                self.buildings = buildings;
                Ok(())
            }
            Err(err) => {
                error!("Failed to fetch buildings: {}", err);
                self.error = Some(LOAD_FAILURE_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Register the building described by the form.
    ///
    /// On success the form is reset and the listing reloaded; a failing
    /// reload does not undo the registration.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<Building, PipelineError>
    where
        G: CityGateway + ?Sized,
    {
        self.error = None;

        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                self.error = Some(err.message().to_string());
                return Err(err.into());
            }
        };

        let created = match gateway.register_building(&payload).await {
            Ok(created) => created,
            Err(err) => {
                error!("Failed to create building: {}", err);
                self.error = Some(err.detail_or(REGISTER_FAILURE_MESSAGE).to_string());
                return Err(err.into());
            }
        };

        self.form = RegistrationForm::default();
        // A failed reload already records its own message.
        let _ = self.load(gateway).await;
        Ok(created)
    }

    /// Listing as displayed.
    pub fn listing(&self) -> BuildingListData {
        BuildingListData {
            rows: self.buildings.iter().map(building_row).collect(),
            total_count: self.buildings.len(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

fn building_row(building: &Building) -> BuildingRow {
    let building_type = match building.building_type.as_str() {
        "" => "-".to_string(),
        kind => kind.to_string(),
    };
    let zone = match building.city_zone.as_deref() {
        Some(zone) if !zone.is_empty() => zone.to_string(),
        _ => "N/A".to_string(),
    };
    let location = match building.coordinates() {
        Some((lat, lng)) => format!("{:.4}, {:.4}", lat, lng),
        None => "-".to_string(),
    };

    BuildingRow {
        id: building.id,
        name: building.name.clone(),
        building_type,
        zone,
        location,
    }
}
