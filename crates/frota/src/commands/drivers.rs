//! Driver command handlers.

use tabled::Tabled;

use frota_core::{Driver, DriverDraft, DriverUpdate, Fleet};

use crate::cli::{DriversArgs, DriversCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DriverRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "License")]
    license: String,
    #[tabled(rename = "Cat")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Vehicle")]
    vehicle: String,
}

impl From<&Driver> for DriverRow {
    fn from(d: &Driver) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            license: d.license_number.clone(),
            category: d.license_type.to_string(),
            status: d.status.to_string(),
            phone: d.phone_number.clone(),
            vehicle: util::cell(d.vehicle_id),
        }
    }
}

fn driver_detail(d: &Driver) -> String {
    format!(
        "ID:        {}\n\
         Name:      {}\n\
         License:   {} (category {})\n\
         Status:    {}\n\
         Phone:     {}\n\
         Email:     {}\n\
         Hired:     {}\n\
         Vehicle:   {}",
        d.id,
        d.name,
        d.license_number,
        d.license_type,
        d.status,
        d.phone_number,
        d.email,
        d.hire_date,
        util::cell(d.vehicle_id),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(fleet: &Fleet, args: DriversArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DriversCommand::List {
            status,
            active,
            expiring_license,
            search,
        } => {
            let mut drivers = if expiring_license {
                fleet.drivers_with_expiring_license().await?
            } else if active {
                fleet.active_drivers().await?
            } else if let Some(ref raw) = status {
                fleet
                    .drivers_by_status(util::parse_enum("status", raw)?)
                    .await?
            } else {
                fleet.drivers().await?
            };

            if let Some(ref needle) = search {
                drivers.retain(|d| {
                    util::matches_search(needle, &[&d.name, &d.license_number, &d.email])
                });
            }

            let out = output::render_list(&global.output, &drivers, |x| DriverRow::from(x), |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DriversCommand::Get { id } => {
            let driver = fleet.driver(id).await?;
            let out = output::render_single(&global.output, &driver, driver_detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DriversCommand::Create {
            name,
            license_number,
            license_type,
            status,
            phone,
            email,
            hire_date,
        } => {
            let draft = DriverDraft {
                name,
                license_number,
                license_type: util::parse_enum("license-type", &license_type)?,
                status: util::parse_enum("status", &status)?,
                phone_number: phone,
                email,
                hire_date: util::parse_date("hire-date", &hire_date)?,
                vehicle_id: None,
            };
            let driver = fleet.create_driver(&draft).await?;
            if !global.quiet {
                eprintln!("Driver {} created ({})", driver.id, driver.name);
            }
            Ok(())
        }

        DriversCommand::Update {
            id,
            name,
            license_number,
            license_type,
            status,
            phone,
            email,
        } => {
            let update = DriverUpdate {
                name,
                license_number,
                license_type: license_type
                    .as_deref()
                    .map(|t| util::parse_enum("license-type", t))
                    .transpose()?,
                status: status
                    .as_deref()
                    .map(|s| util::parse_enum("status", s))
                    .transpose()?,
                phone_number: phone,
                email,
                hire_date: None,
                vehicle_id: None,
            };
            let driver = fleet.update_driver(id, &update).await?;
            if !global.quiet {
                eprintln!("Driver {} updated", driver.id);
            }
            Ok(())
        }

        DriversCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete driver {id}? Assigned vehicles keep a stale reference."),
                "drivers delete",
                global.yes,
            )? {
                return Ok(());
            }
            fleet.remove_driver(id).await?;
            if !global.quiet {
                eprintln!("Driver {id} deleted");
            }
            Ok(())
        }
    }
}
