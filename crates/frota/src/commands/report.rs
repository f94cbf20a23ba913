//! Fleet report export.

use chrono::{DateTime, Utc};
use serde::Serialize;

use frota_core::{
    DashboardMetrics, DriverStatusStatistics, Fleet, FuelStatistic, TopDriver,
    VehicleStatusStatistics,
};

use crate::cli::{GlobalOpts, OutputFormat, ReportArgs, ReportCommand};
use crate::error::CliError;
use crate::output;

/// One self-contained document with every dashboard aggregate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FleetReport {
    generated_at: DateTime<Utc>,
    metrics: DashboardMetrics,
    vehicle_status: VehicleStatusStatistics,
    driver_status: DriverStatusStatistics,
    fuel_statistics: Vec<FuelStatistic>,
    top_drivers: Vec<TopDriver>,
}

pub async fn handle(fleet: &Fleet, args: ReportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ReportCommand::Export { out } => {
            let report = FleetReport {
                generated_at: Utc::now(),
                metrics: fleet.dashboard_metrics().await?,
                vehicle_status: fleet.vehicle_status_statistics().await?,
                driver_status: fleet.driver_status_statistics().await?,
                fuel_statistics: fleet.fuel_statistics().await?,
                top_drivers: fleet.top_drivers().await?,
            };

            // Table has no sensible shape for a nested document;
            // it falls back to pretty JSON.
            let rendered = match global.output {
                OutputFormat::Yaml => output::render_yaml(&report),
                OutputFormat::JsonCompact => output::render_json_compact(&report),
                _ => output::render_json_pretty(&report),
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    if !global.quiet {
                        eprintln!("Report written to {}", path.display());
                    }
                }
                None => output::print_output(&rendered, global.quiet),
            }
            Ok(())
        }
    }
}
