pub mod city_map;
pub mod forecast;
pub mod optimization;
pub mod overview;
pub mod registry;
pub mod state;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all view name constants are accessible
        assert_eq!(super::city_map::CITY_MAP_VIEW, "map");
        assert_eq!(super::forecast::FORECAST_VIEW, "forecast");
        assert_eq!(super::optimization::OPTIMIZE_VIEW, "optimize");
        assert_eq!(super::overview::RISK_VIEW, "risk");
        assert_eq!(super::overview::SUMMARY_VIEW, "summary");
        assert_eq!(super::registry::BUILDINGS_VIEW, "buildings");
        assert_eq!(super::registry::REGISTER_VIEW, "register");
    }
}
