use serde::{Deserialize, Serialize};

use crate::models::BuildingId;

/// One row of the building listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRow {
    pub id: BuildingId,
    pub name: String,
    pub building_type: String,
    pub zone: String,
    /// `lat, lng` with four decimals, `-` without coordinates.
    pub location: String,
}

/// Building listing as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingListData {
    pub rows: Vec<BuildingRow>,
    pub total_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

/// View name constants
pub const BUILDINGS_VIEW: &str = "buildings";
pub const REGISTER_VIEW: &str = "register";
