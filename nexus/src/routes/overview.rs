use serde::{Deserialize, Serialize};

use crate::models::InstitutionId;

/// Institution risk as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskView {
    pub institution_id: Option<InstitutionId>,
    pub risk_level: f64,
    /// e.g. `Risk Level: 72.5%`
    pub risk_label: String,
    pub notes: Option<String>,
    pub timestamp: String,
}

/// Headline card of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

/// View name constants
pub const RISK_VIEW: &str = "risk";
pub const SUMMARY_VIEW: &str = "summary";
