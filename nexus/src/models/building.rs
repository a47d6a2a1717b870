use serde::{Deserialize, Serialize};

crate::define_id_type!(BuildingId);

/// Category of a monitored building.
///
/// The backend stores the type as a free-form string. Known categories map to
/// dedicated variants; anything else is kept verbatim in [`BuildingType::Other`]
/// so that decoding never fails on an unexpected value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildingType {
    #[default]
    School,
    College,
    Office,
    Residential,
    Hostel,
    Other(String),
}

impl BuildingType {
    pub fn as_str(&self) -> &str {
        match self {
            BuildingType::School => "school",
            BuildingType::College => "college",
            BuildingType::Office => "office",
            BuildingType::Residential => "residential",
            BuildingType::Hostel => "hostel",
            BuildingType::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for BuildingType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "school" => BuildingType::School,
            "college" => BuildingType::College,
            "office" => BuildingType::Office,
            "residential" => BuildingType::Residential,
            "hostel" => BuildingType::Hostel,
            _ => BuildingType::Other(raw),
        }
    }
}

impl From<&str> for BuildingType {
    fn from(raw: &str) -> Self {
        BuildingType::from(raw.to_string())
    }
}

impl From<BuildingType> for String {
    fn from(kind: BuildingType) -> Self {
        match kind {
            BuildingType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered building as listed by `GET /city/buildings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    #[serde(rename = "type")]
    pub building_type: BuildingType,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub city_zone: Option<String>,
}

impl Building {
    /// Both coordinates, when the building can be placed on a map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Registration payload for `POST /city/buildings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBuilding {
    pub name: String,
    #[serde(rename = "type")]
    pub building_type: BuildingType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub city_zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_type_known_values() {
        assert_eq!(BuildingType::from("school"), BuildingType::School);
        assert_eq!(BuildingType::from("hostel"), BuildingType::Hostel);
        assert_eq!(BuildingType::Residential.as_str(), "residential");
    }

    #[test]
    fn test_building_type_unknown_value_is_kept() {
        let kind: BuildingType = serde_json::from_str("\"warehouse\"").unwrap();
        assert_eq!(kind, BuildingType::Other("warehouse".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"warehouse\"");
    }

    #[test]
    fn test_building_decodes_without_coordinates() {
        let json = r#"{"id": 4, "name": "Depot", "type": "office"}"#;
        let building: Building = serde_json::from_str(json).unwrap();

        assert_eq!(building.id, BuildingId::new(4));
        assert_eq!(building.building_type, BuildingType::Office);
        assert!(building.coordinates().is_none());
        assert!(building.city_zone.is_none());
    }

    #[test]
    fn test_building_coordinates_need_both_fields() {
        let json = r#"{"id": 1, "name": "A", "type": "school", "latitude": 12.9, "longitude": null}"#;
        let building: Building = serde_json::from_str(json).unwrap();
        assert!(building.coordinates().is_none());
    }

    #[test]
    fn test_new_building_omits_absent_fields() {
        let payload = NewBuilding {
            name: "Library".to_string(),
            building_type: BuildingType::College,
            latitude: None,
            longitude: None,
            city_zone: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["type"], "college");
        assert!(!object.contains_key("latitude"));
        assert!(!object.contains_key("city_zone"));
    }

    #[test]
    fn test_building_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&BuildingId::new(7)).unwrap(), "7");
        assert_eq!(serde_json::from_str::<BuildingId>("7").unwrap(), BuildingId::from(7));
        assert_eq!(BuildingId::new(7).to_string(), "7");
        assert_eq!(BuildingId::new(7).value(), 7);
    }
}
