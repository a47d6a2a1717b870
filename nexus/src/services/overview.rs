//! Institution risk lookup and the dashboard headline cards.

use log::error;
use serde::Serialize;

use crate::api::{
    DashboardSummary, InstitutionId, InstitutionRisk, MetricCard, RiskView, ViewState,
};
use crate::gateway::{AnalyticsGateway, EducationGateway};

pub const RISK_FAILURE_MESSAGE: &str = "Failed to load institution risk.";
pub const INVALID_INSTITUTION_ID_MESSAGE: &str = "Institution ID must be a whole number.";

impl From<InstitutionRisk> for RiskView {
    fn from(risk: InstitutionRisk) -> Self {
        RiskView {
            institution_id: risk.institution_id,
            risk_label: format!("Risk Level: {:.1}%", risk.risk_level * 100.0),
            risk_level: risk.risk_level,
            notes: risk.notes,
            timestamp: risk.timestamp,
        }
    }
}

/// Institution risk panel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RiskPanel {
    pub state: ViewState<RiskView>,
}

impl RiskPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the risk of `institution_id` as typed. Empty input does
    /// nothing.
    pub async fn fetch<G>(&mut self, gateway: &G, institution_id: &str) -> &ViewState<RiskView>
    where
        G: EducationGateway + ?Sized,
    {
        let raw = institution_id.trim();
        if raw.is_empty() {
            return &self.state;
        }

        self.state = match raw.parse::<i64>() {
            Err(_) => ViewState::Failed(INVALID_INSTITUTION_ID_MESSAGE.to_string()),
            Ok(id) => match gateway.get_institution_risk(InstitutionId::new(id)).await {
                Ok(risk) => ViewState::Ready(RiskView::from(risk)),
                Err(err) => {
                    error!("Failed to fetch risk for institution {}: {}", id, err);
                    ViewState::Failed(err.detail_or(RISK_FAILURE_MESSAGE).to_string())
                }
            },
        };
        &self.state
    }
}

/// Dashboard counters, or `None` when they could not be fetched.
///
/// The failure is logged only; the dashboard simply shows no cards.
pub async fn load_dashboard_summary<G>(gateway: &G) -> Option<DashboardSummary>
where
    G: AnalyticsGateway + ?Sized,
{
    match gateway.get_dashboard_summary().await {
        Ok(summary) => Some(summary),
        Err(err) => {
            error!("Failed to load dashboard summary: {}", err);
            None
        }
    }
}

/// Headline cards in display order.
pub fn summary_cards(summary: &DashboardSummary) -> Vec<MetricCard> {
    let card = |title: &str, value: String, subtitle: &str| MetricCard {
        title: title.to_string(),
        value,
        subtitle: subtitle.to_string(),
    };

    vec![
        card(
            "Monitored Buildings",
            summary.monitored_buildings.to_string(),
            "Schools, colleges & offices",
        ),
        card(
            "Avg. Daily Energy (kWh)",
            group_thousands(summary.avg_daily_energy_kwh),
            "Last 7-day rolling avg",
        ),
        card(
            "At-Risk Institutions",
            summary.at_risk_institutions.to_string(),
            "Based on education risk model",
        ),
        card(
            "Potential Energy Savings",
            format!("{}%", summary.potential_energy_savings_percent),
            "Estimated from recent load profile",
        ),
    ]
}

/// `1234567.891` -> `1,234,567.891`, at most three decimals.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            monitored_buildings: 12,
            avg_daily_energy_kwh: 15234.5,
            at_risk_institutions: 3,
            potential_energy_savings_percent: 15.0,
        }
    }

    #[test]
    fn test_risk_label() {
        let view = RiskView::from(InstitutionRisk {
            institution_id: Some(InstitutionId::new(1)),
            risk_level: 0.7254,
            notes: Some("Attendance dropping".to_string()),
            timestamp: "2024-05-01T00:00:00".to_string(),
        });
        assert_eq!(view.risk_label, "Risk Level: 72.5%");
        assert_eq!(view.notes.as_deref(), Some("Attendance dropping"));
    }

    #[test]
    fn test_summary_cards() {
        let cards = summary_cards(&summary());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "12");
        assert_eq!(cards[1].value, "15,234.5");
        assert_eq!(cards[2].title, "At-Risk Institutions");
        assert_eq!(cards[3].value, "15%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.891), "1,234,567.891");
        assert_eq!(group_thousands(-4321.25), "-4,321.25");
    }

    #[cfg(feature = "local-gateway")]
    mod with_gateway {
        use super::*;
        use crate::error::RemoteError;
        use crate::gateway::{GatewayOperation, LocalGateway};

        #[tokio::test]
        async fn test_empty_institution_id_is_a_no_op() {
            let gateway = LocalGateway::new();
            let mut panel = RiskPanel::new();
            assert!(panel.fetch(&gateway, "").await.is_idle());
            assert_eq!(gateway.call_count(GatewayOperation::GetInstitutionRisk), 0);
        }

        #[tokio::test]
        async fn test_unknown_institution_shows_backend_detail() {
            let gateway = LocalGateway::new();
            let mut panel = RiskPanel::new();
            let state = panel.fetch(&gateway, "42").await;
            assert_eq!(state.error(), Some("Institution not found"));
        }

        #[tokio::test]
        async fn test_summary_failure_is_absorbed() {
            let gateway = LocalGateway::new();
            gateway.seed_summary(summary());
            assert_eq!(load_dashboard_summary(&gateway).await, Some(summary()));

            gateway.fail_operation(
                GatewayOperation::GetDashboardSummary,
                RemoteError::transport(GatewayOperation::GetDashboardSummary, "refused"),
            );
            assert_eq!(load_dashboard_summary(&gateway).await, None);
        }
    }
}
