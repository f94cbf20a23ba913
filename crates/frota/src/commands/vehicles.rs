//! Vehicle command handlers.

use tabled::Tabled;

use frota_core::{Fleet, Vehicle, VehicleDraft, VehicleUpdate};

use crate::cli::{GlobalOpts, VehiclesArgs, VehiclesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct VehicleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Plate")]
    plate: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Fuel")]
    fuel: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Mileage")]
    mileage: String,
    #[tabled(rename = "Driver")]
    driver: String,
}

impl From<&Vehicle> for VehicleRow {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id,
            plate: v.license_plate.clone(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            year: v.year,
            fuel: v.fuel_type.to_string(),
            status: v.status.to_string(),
            mileage: format!("{:.0} km", v.mileage),
            driver: util::cell(v.driver_id),
        }
    }
}

fn vehicle_detail(v: &Vehicle) -> String {
    format!(
        "ID:               {}\n\
         Plate:            {}\n\
         Brand:            {}\n\
         Model:            {}\n\
         Year:             {}\n\
         Fuel:             {}\n\
         Status:           {}\n\
         Mileage:          {:.1} km\n\
         Last maintenance: {}\n\
         Next maintenance: {}\n\
         Driver:           {}",
        v.id,
        v.license_plate,
        v.brand,
        v.model,
        v.year,
        v.fuel_type,
        v.status,
        v.mileage,
        util::cell(v.last_maintenance),
        util::cell(v.next_maintenance),
        util::cell(v.driver_id),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    fleet: &Fleet,
    args: VehiclesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VehiclesCommand::List {
            status,
            available,
            needs_maintenance,
            low_fuel,
            fuel,
            search,
        } => {
            let mut vehicles = if needs_maintenance {
                fleet.vehicles_needing_maintenance().await?
            } else if low_fuel {
                fleet.low_fuel_vehicles().await?
            } else if available {
                fleet.available_vehicles().await?
            } else if let Some(ref raw) = status {
                fleet
                    .vehicles_by_status(util::parse_enum("status", raw)?)
                    .await?
            } else {
                fleet.vehicles().await?
            };

            if let Some(ref raw) = fuel {
                let fuel_type = util::parse_enum("fuel", raw)?;
                vehicles.retain(|v| v.fuel_type == fuel_type);
            }
            if let Some(ref needle) = search {
                vehicles.retain(|v| {
                    util::matches_search(needle, &[&v.brand, &v.model, &v.license_plate])
                });
            }

            let out = output::render_list(&global.output, &vehicles, |x| VehicleRow::from(x), |v| {
                v.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VehiclesCommand::Get { id } => {
            let vehicle = fleet.vehicle(id).await?;
            let out = output::render_single(&global.output, &vehicle, vehicle_detail, |v| {
                v.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VehiclesCommand::Create {
            brand,
            model,
            plate,
            year,
            fuel,
            status,
            mileage,
            next_maintenance,
        } => {
            let draft = VehicleDraft {
                brand,
                model,
                license_plate: plate,
                year,
                fuel_type: util::parse_enum("fuel", &fuel)?,
                status: util::parse_enum("status", &status)?,
                mileage,
                last_maintenance: None,
                next_maintenance: next_maintenance
                    .as_deref()
                    .map(|d| util::parse_date("next-maintenance", d))
                    .transpose()?,
                driver_id: None,
            };
            let vehicle = fleet.create_vehicle(&draft).await?;
            if !global.quiet {
                eprintln!("Vehicle {} created ({})", vehicle.id, vehicle.license_plate);
            }
            Ok(())
        }

        VehiclesCommand::Update {
            id,
            brand,
            model,
            plate,
            year,
            fuel,
            status,
            mileage,
            last_maintenance,
            next_maintenance,
        } => {
            let update = VehicleUpdate {
                brand,
                model,
                license_plate: plate,
                year,
                fuel_type: fuel
                    .as_deref()
                    .map(|f| util::parse_enum("fuel", f))
                    .transpose()?,
                status: status
                    .as_deref()
                    .map(|s| util::parse_enum("status", s))
                    .transpose()?,
                mileage,
                last_maintenance: last_maintenance
                    .as_deref()
                    .map(|d| util::parse_date("last-maintenance", d))
                    .transpose()?,
                next_maintenance: next_maintenance
                    .as_deref()
                    .map(|d| util::parse_date("next-maintenance", d))
                    .transpose()?,
                driver_id: None,
            };
            let vehicle = fleet.update_vehicle(id, &update).await?;
            if !global.quiet {
                eprintln!("Vehicle {} updated", vehicle.id);
            }
            Ok(())
        }

        VehiclesCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete vehicle {id}? This cannot be undone."),
                "vehicles delete",
                global.yes,
            )? {
                return Ok(());
            }
            fleet.remove_vehicle(id).await?;
            if !global.quiet {
                eprintln!("Vehicle {id} deleted");
            }
            Ok(())
        }

        VehiclesCommand::Assign { vehicle, driver } => {
            let updated = fleet.assign_driver(vehicle, driver).await?;
            if !global.quiet {
                eprintln!("Driver {driver} assigned to vehicle {}", updated.id);
            }
            Ok(())
        }

        VehiclesCommand::Unassign { vehicle } => {
            let updated = fleet.unassign_driver(vehicle).await?;
            if !global.quiet {
                eprintln!("Vehicle {} driver unassigned", updated.id);
            }
            Ok(())
        }
    }
}
