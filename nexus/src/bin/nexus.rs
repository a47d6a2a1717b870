//! Nexus dashboard CLI
//!
//! Drives the dashboard pipeline against the monitoring backend and prints
//! each view model as pretty JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! nexus buildings
//! nexus register <name> <type> [latitude] [longitude] [zone]
//! nexus forecast <building_id> [horizon_hours]
//! nexus map
//! nexus risk <institution_id>
//! nexus optimize <building_id> <max_load_kw> [hours] [peak|cost|emissions] [day_tariff] [night_tariff]
//! nexus summary
//! nexus theme [light|dark|toggle]
//! ```
//!
//! # Environment Variables
//!
//! - `NEXUS_API_BASE_URL`: Backend API root (default: http://127.0.0.1:8000/api/v1)
//! - `NEXUS_GATEWAY`: `http` or `local` (default: http)
//! - `NEXUS_REQUEST_TIMEOUT_SECS` / `NEXUS_CONNECT_TIMEOUT_SECS`: Timeouts
//! - `RUST_LOG`: Log filter (default: info)
//!
//! A `nexus.toml` in the working directory takes precedence over the
//! environment.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use nexus_dashboard::api::{ForecastViewData, DEFAULT_HORIZON_HOURS};
use nexus_dashboard::gateway::{DashboardGateway, GatewayFactory, NexusConfig};
use nexus_dashboard::preferences::{self, Theme, DEFAULT_PREFERENCES_FILE};
use nexus_dashboard::routes::city_map::CITY_MAP_VIEW;
use nexus_dashboard::routes::forecast::FORECAST_VIEW;
use nexus_dashboard::routes::optimization::OPTIMIZE_VIEW;
use nexus_dashboard::routes::overview::{RISK_VIEW, SUMMARY_VIEW};
use nexus_dashboard::routes::registry::{BUILDINGS_VIEW, REGISTER_VIEW};
use nexus_dashboard::services::optimization::OPTIMIZE_FAILURE_MESSAGE;
use nexus_dashboard::services::registry::REGISTER_FAILURE_MESSAGE;
use nexus_dashboard::services::{
    load_dashboard_summary, summary_cards, BuildingRegistry, CityMapPanel, ForecastPanel,
    OptimizationForm, OptimizationPanel, RegistrationForm, RiskPanel,
};

const THEME_VIEW: &str = "theme";

const USAGE: &str = "usage: nexus <buildings|register|forecast|map|risk|optimize|summary|theme> [args...]";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn arg(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or("")
}

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!(USAGE);
    };

    let config = NexusConfig::load().context("Failed to load configuration")?;

    if command == THEME_VIEW {
        let path = config
            .preferences
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_FILE));
        return run_theme(path, arg(&args, 1));
    }

    let gateway = GatewayFactory::create(&config.gateway)?;
    info!(
        "Using {} gateway at {}",
        config.gateway.kind,
        config.gateway.normalized_base_url()
    );

    run_view(gateway.as_ref(), command, &args[1..]).await
}

fn run_theme(path: PathBuf, action: &str) -> Result<()> {
    preferences::init(&path)?;
    let theme = match action {
        "" => preferences::theme(),
        "toggle" => preferences::toggle_theme()?,
        "light" | "dark" => {
            let theme = Theme::from(action.to_string());
            preferences::set_theme(theme)?;
            theme
        }
        other => bail!("Unknown theme action '{}': expected light, dark or toggle", other),
    };
    print_json(&theme)
}

async fn run_view(gateway: &dyn DashboardGateway, command: &str, args: &[String]) -> Result<()> {
    match command {
        BUILDINGS_VIEW => {
            let mut registry = BuildingRegistry::new();
            // The listing carries the failure message.
            let _ = registry.load(gateway).await;
            print_json(&registry.listing())
        }
        REGISTER_VIEW => {
            let mut registry = BuildingRegistry::new();
            registry.form = RegistrationForm {
                name: arg(args, 0).to_string(),
                building_type: match arg(args, 1) {
                    "" => RegistrationForm::default().building_type,
                    kind => kind.to_string(),
                },
                latitude: arg(args, 2).to_string(),
                longitude: arg(args, 3).to_string(),
                city_zone: arg(args, 4).to_string(),
            };
            let created = registry
                .submit(gateway)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message(REGISTER_FAILURE_MESSAGE)))?;
            print_json(&created)
        }
        FORECAST_VIEW => {
            let horizon = match arg(args, 1) {
                "" => DEFAULT_HORIZON_HOURS,
                raw => raw.parse().context("horizon_hours must be a whole number")?,
            };
            let mut panel = ForecastPanel::new(horizon);
            if let Err(e) = panel.fetch(gateway, arg(args, 0)).await {
                eprintln!("{}", e.user_message("Unable to load forecast."));
            }
            let view: ForecastViewData = panel.view();
            print_json(&view)
        }
        CITY_MAP_VIEW => {
            let mut panel = CityMapPanel::new();
            panel.load(gateway).await;
            print_json(&panel.state)
        }
        RISK_VIEW => {
            let mut panel = RiskPanel::new();
            print_json(panel.fetch(gateway, arg(args, 0)).await)
        }
        OPTIMIZE_VIEW => {
            let defaults = OptimizationForm::default();
            let or_default = |index: usize, default: &str| match arg(args, index) {
                "" => default.to_string(),
                raw => raw.to_string(),
            };
            let form = OptimizationForm {
                building_id: arg(args, 0).to_string(),
                max_load_kw: arg(args, 1).to_string(),
                hours: or_default(2, &defaults.hours),
                mode: match arg(args, 3) {
                    "" => defaults.mode,
                    raw => raw.parse().map_err(anyhow::Error::msg)?,
                },
                day_tariff: or_default(4, &defaults.day_tariff),
                night_tariff: or_default(5, &defaults.night_tariff),
            };

            let mut panel = OptimizationPanel::with_form(form);
            match panel.submit(gateway).await {
                Ok(view) => print_json(view),
                Err(e) => bail!(e.user_message(OPTIMIZE_FAILURE_MESSAGE)),
            }
        }
        SUMMARY_VIEW => {
            let cards = load_dashboard_summary(gateway)
                .await
                .map(|summary| summary_cards(&summary))
                .unwrap_or_default();
            print_json(&cards)
        }
        other => bail!("Unknown command '{}'\n{}", other, USAGE),
    }
}
