use serde::{Deserialize, Serialize};

crate::define_id_type!(InstitutionId);

/// Dropout/performance risk estimate for one institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRisk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<InstitutionId>,
    /// Fraction in `[0, 1]`.
    pub risk_level: f64,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: String,
}
