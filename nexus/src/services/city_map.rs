//! Building markers sized by 24h energy intensity and coloured by type.

use std::collections::HashMap;

use crate::api::{
    Building, BuildingId, BuildingType, CityMapData, EnergyIntensitySample, GeoPoint, MapMarker,
    TypeColorInfo,
};

/// Bengaluru, the default map center.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: 12.9716,
    longitude: 77.5946,
};

pub const DEFAULT_ZOOM: u8 = 12;

/// Radius of a building without a usable intensity sample.
pub const BASE_RADIUS: f64 = 6.0;

/// Extra radius of the most energy-intensive building.
pub const RADIUS_SPAN: f64 = 12.0;

pub const SCHOOL_COLOR: &str = "#3b82f6";
pub const COLLEGE_COLOR: &str = "#a855f7";
pub const OFFICE_COLOR: &str = "#f97316";
pub const RESIDENTIAL_COLOR: &str = "#22c55e";
pub const DEFAULT_TYPE_COLOR: &str = "#6b7280";

/// Marker colour of a building type. Hostels and unknown types are gray.
pub fn color_for_type(building_type: &BuildingType) -> &'static str {
    match building_type {
        BuildingType::School => SCHOOL_COLOR,
        BuildingType::College => COLLEGE_COLOR,
        BuildingType::Office => OFFICE_COLOR,
        BuildingType::Residential => RESIDENTIAL_COLOR,
        _ => DEFAULT_TYPE_COLOR,
    }
}

/// Legend of the coloured types, plus the gray catch-all.
pub fn type_legend() -> Vec<TypeColorInfo> {
    [
        ("School", SCHOOL_COLOR),
        ("College", COLLEGE_COLOR),
        ("Office", OFFICE_COLOR),
        ("Residential", RESIDENTIAL_COLOR),
        ("Other", DEFAULT_TYPE_COLOR),
    ]
    .into_iter()
    .map(|(label, color)| TypeColorInfo {
        label: label.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// `building_id -> total_kwh_24h`. A later sample for the same building
/// replaces an earlier one.
pub fn intensity_lookup(samples: &[EnergyIntensitySample]) -> HashMap<BuildingId, f64> {
    samples
        .iter()
        .map(|s| (s.building_id, s.total_kwh_24h))
        .collect()
}

/// Largest 24h total, or 0 for no samples. Negative and NaN totals never
/// raise the maximum above 0.
pub fn max_intensity(samples: &[EnergyIntensitySample]) -> f64 {
    samples
        .iter()
        .map(|s| s.total_kwh_24h)
        .fold(0.0, |max, v| if v > max { v } else { max })
}

/// Radius in `[BASE_RADIUS, BASE_RADIUS + RADIUS_SPAN]`, linear in the
/// building's share of the maximum.
pub fn marker_radius(intensity: Option<f64>, max_intensity: f64) -> f64 {
    match intensity {
        Some(v) if v.is_finite() && v != 0.0 && max_intensity > 0.0 => {
            let radius = BASE_RADIUS + (v / max_intensity) * RADIUS_SPAN;
            radius.clamp(BASE_RADIUS, BASE_RADIUS + RADIUS_SPAN)
        }
        _ => BASE_RADIUS,
    }
}

fn popup_lines(building: &Building, lat: f64, lon: f64, intensity: Option<f64>) -> Vec<String> {
    let mut lines = vec![
        building.name.clone(),
        format!("Type: {}", building.building_type),
        format!("Zone: {}", building.city_zone.as_deref().unwrap_or("N/A")),
        format!("Lat: {:.4}, Lon: {:.4}", lat, lon),
    ];
    if let Some(total) = intensity {
        lines.push(format!("24h Energy: {:.1} kWh", total));
    }
    lines
}

/// Compute the city map from the building list and the (possibly empty)
/// intensity samples.
///
/// Buildings without both coordinates are counted but not mapped.
pub fn compute_city_map_data(
    buildings: &[Building],
    samples: &[EnergyIntensitySample],
) -> CityMapData {
    let lookup = intensity_lookup(samples);
    let max = max_intensity(samples);

    let markers: Vec<MapMarker> = buildings
        .iter()
        .filter_map(|building| {
            let (latitude, longitude) = building.coordinates()?;
            let intensity = lookup.get(&building.id).copied();

            Some(MapMarker {
                building_id: building.id,
                name: building.name.clone(),
                building_type: building.building_type.clone(),
                position: GeoPoint {
                    latitude,
                    longitude,
                },
                radius: marker_radius(intensity, max),
                color: color_for_type(&building.building_type).to_string(),
                total_kwh_24h: intensity,
                popup: popup_lines(building, latitude, longitude, intensity),
            })
        })
        .collect();

    CityMapData {
        center: DEFAULT_CENTER,
        zoom: DEFAULT_ZOOM,
        mapped_buildings: markers.len(),
        markers,
        legend: type_legend(),
        max_intensity: max,
        total_buildings: buildings.len(),
        degraded: false,
    }
}
