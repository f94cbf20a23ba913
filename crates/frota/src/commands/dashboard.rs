//! Dashboard command handlers.

use serde::Serialize;
use tabled::Tabled;

use frota_core::{
    DashboardAlert, DriverStatusStatistics, Fleet, FuelStatistic, TopDriver,
    VehicleStatusStatistics,
};

use crate::cli::{DashboardArgs, DashboardCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "When")]
    timestamp: String,
}

impl From<&DashboardAlert> for AlertRow {
    fn from(a: &DashboardAlert) -> Self {
        Self {
            id: a.id,
            kind: a.kind.clone(),
            title: a.title.clone(),
            timestamp: a.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Tabled)]
struct FuelRow {
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Consumption")]
    consumption: String,
    #[tabled(rename = "Last refuel")]
    last_refuel: String,
}

impl From<&FuelStatistic> for FuelRow {
    fn from(f: &FuelStatistic) -> Self {
        Self {
            vehicle: format!("{} (#{})", f.vehicle_name, f.vehicle_id),
            consumption: format!("{:.1} L/100km", f.consumption),
            last_refuel: util::cell(f.last_refuel.map(|t| t.format("%Y-%m-%d").to_string())),
        }
    }
}

#[derive(Tabled)]
struct TopDriverRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Trips")]
    trips: i64,
    #[tabled(rename = "Mileage")]
    mileage: String,
}

impl From<&TopDriver> for TopDriverRow {
    fn from(d: &TopDriver) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            rating: format!("{:.1}", d.rating),
            trips: d.trips_completed,
            mileage: format!("{:.0} km", d.total_mileage),
        }
    }
}

/// Combined per-status counts, for the `dashboard status` view.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBreakdown {
    vehicles: VehicleStatusStatistics,
    drivers: DriverStatusStatistics,
}

fn status_detail(s: &StatusBreakdown) -> String {
    format!(
        "Vehicles\n\
         \x20 available:      {}\n\
         \x20 in use:         {}\n\
         \x20 maintenance:    {}\n\
         \x20 out of service: {}\n\
         Drivers\n\
         \x20 active:         {}\n\
         \x20 inactive:       {}\n\
         \x20 on trip:        {}\n\
         \x20 on leave:       {}",
        s.vehicles.available_vehicles,
        s.vehicles.in_use_vehicles,
        s.vehicles.maintenance_vehicles,
        s.vehicles.out_of_service_vehicles,
        s.drivers.active_drivers,
        s.drivers.inactive_drivers,
        s.drivers.on_trip_drivers,
        s.drivers.on_leave_drivers,
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    fleet: &Fleet,
    args: DashboardArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DashboardCommand::Metrics => {
            let metrics = fleet.dashboard_metrics().await?;
            let out = output::render_single(
                &global.output,
                &metrics,
                |m| {
                    format!(
                        "Vehicles:         {}\n\
                         Drivers:          {}\n\
                         Open maintenance: {}\n\
                         Total mileage:    {:.0} km\n\
                         Fuel consumption: {:.1} L/100km\n\
                         Active trips:     {}",
                        m.total_vehicles,
                        m.total_drivers,
                        m.maintenance_count,
                        m.total_mileage,
                        m.fuel_consumption,
                        m.active_trips
                    )
                },
                |m| m.total_vehicles.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardCommand::Alerts => {
            let alerts = fleet.dashboard_alerts().await?;
            let out = output::render_list(&global.output, &alerts, |x| AlertRow::from(x), |a| {
                a.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardCommand::Fuel => {
            let stats = fleet.fuel_statistics().await?;
            let out = output::render_list(&global.output, &stats, |x| FuelRow::from(x), |f| {
                f.vehicle_id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardCommand::Status => {
            let breakdown = StatusBreakdown {
                vehicles: fleet.vehicle_status_statistics().await?,
                drivers: fleet.driver_status_statistics().await?,
            };
            let out = output::render_single(&global.output, &breakdown, status_detail, |s| {
                s.vehicles.available_vehicles.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardCommand::TopDrivers => {
            let drivers = fleet.top_drivers().await?;
            let out = output::render_list(&global.output, &drivers, |x| TopDriverRow::from(x), |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
