//! Maintenance ticket command handlers.

use tabled::Tabled;

use frota_core::{Fleet, Maintenance, MaintenanceDraft, MaintenanceStatus, MaintenanceUpdate, PageQuery};

use crate::cli::{GlobalOpts, MaintenanceArgs, MaintenanceCommand, OutputFormat, PageArgs};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MaintenanceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Vehicle")]
    vehicle: i64,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Scheduled")]
    scheduled: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Mechanic")]
    mechanic: String,
}

impl From<&Maintenance> for MaintenanceRow {
    fn from(m: &Maintenance) -> Self {
        Self {
            id: m.id,
            vehicle: m.vehicle_id,
            kind: m.kind.to_string(),
            status: m.status.to_string(),
            scheduled: m.scheduled_date.to_string(),
            cost: format!("{:.2}", m.cost),
            mechanic: m.mechanic_name.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

fn maintenance_detail(m: &Maintenance) -> String {
    format!(
        "ID:          {}\n\
         Vehicle:     {}\n\
         Type:        {}\n\
         Status:      {}\n\
         Description: {}\n\
         Cost:        {:.2}\n\
         Scheduled:   {}\n\
         Completed:   {}\n\
         Mechanic:    {}\n\
         Notes:       {}",
        m.id,
        m.vehicle_id,
        m.kind,
        m.status,
        m.description,
        m.cost,
        m.scheduled_date,
        util::cell(m.completed_date),
        m.mechanic_name.as_deref().unwrap_or("-"),
        m.notes.as_deref().unwrap_or("-"),
    )
}

fn to_query(page: &PageArgs) -> PageQuery {
    PageQuery {
        page: page.page,
        size: page.size,
        sort_by: page.sort_by.clone(),
        sort_dir: page.sort_dir.clone(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    fleet: &Fleet,
    args: MaintenanceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MaintenanceCommand::List {
            page,
            vehicle,
            status,
            from,
            to,
        } => {
            // Vehicle, status, and date-window filters use dedicated
            // endpoints that return unpaged lists; the default listing
            // is paged.
            if let (Some(from), Some(to)) = (from.as_deref(), to.as_deref()) {
                let tickets = fleet
                    .scheduled_maintenances(
                        util::parse_date("from", from)?,
                        util::parse_date("to", to)?,
                    )
                    .await?;
                print_tickets(&tickets, global);
                return Ok(());
            }
            if let Some(vehicle_id) = vehicle {
                let tickets = fleet.maintenances_for_vehicle(vehicle_id).await?;
                print_tickets(&tickets, global);
                return Ok(());
            }
            if let Some(ref raw) = status {
                let status: MaintenanceStatus = util::parse_enum("status", raw)?;
                let tickets = fleet.maintenances_by_status(status).await?;
                print_tickets(&tickets, global);
                return Ok(());
            }

            let result = fleet.maintenances(&to_query(&page)).await?;
            print_tickets(&result.content, global);
            if matches!(global.output, OutputFormat::Table) && !global.quiet {
                eprintln!(
                    "page {}/{} ({} total)",
                    result.number + 1,
                    result.total_pages.max(1),
                    result.total_elements
                );
            }
            Ok(())
        }

        MaintenanceCommand::Get { id } => {
            let ticket = fleet.maintenance(id).await?;
            let out = output::render_single(&global.output, &ticket, maintenance_detail, |m| {
                m.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MaintenanceCommand::Create {
            vehicle,
            kind,
            description,
            cost,
            date,
            mechanic,
            notes,
        } => {
            let draft = MaintenanceDraft {
                vehicle_id: vehicle,
                kind: util::parse_enum("type", &kind)?,
                description,
                cost,
                status: MaintenanceStatus::Scheduled,
                scheduled_date: util::parse_date("date", &date)?,
                mechanic_name: mechanic,
                notes,
            };
            let ticket = fleet.create_maintenance(&draft).await?;
            if !global.quiet {
                eprintln!(
                    "Maintenance {} scheduled for vehicle {} on {}",
                    ticket.id, ticket.vehicle_id, ticket.scheduled_date
                );
            }
            Ok(())
        }

        MaintenanceCommand::Update {
            id,
            kind,
            description,
            cost,
            date,
            mechanic,
            notes,
        } => {
            let update = MaintenanceUpdate {
                vehicle_id: None,
                kind: kind
                    .as_deref()
                    .map(|k| util::parse_enum("type", k))
                    .transpose()?,
                description,
                cost,
                status: None,
                scheduled_date: date
                    .as_deref()
                    .map(|d| util::parse_date("date", d))
                    .transpose()?,
                completed_date: None,
                mechanic_name: mechanic,
                notes,
            };
            let ticket = fleet.update_maintenance(id, &update).await?;
            if !global.quiet {
                eprintln!("Maintenance {} updated", ticket.id);
            }
            Ok(())
        }

        MaintenanceCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete maintenance ticket {id}?"),
                "maintenance delete",
                global.yes,
            )? {
                return Ok(());
            }
            fleet.remove_maintenance(id).await?;
            if !global.quiet {
                eprintln!("Maintenance {id} deleted");
            }
            Ok(())
        }

        MaintenanceCommand::Start { id } => {
            let ticket = fleet.start_maintenance(id).await?;
            if !global.quiet {
                eprintln!("Maintenance {} is now {}", ticket.id, ticket.status);
            }
            Ok(())
        }

        MaintenanceCommand::Complete { id } => {
            let ticket = fleet.complete_maintenance(id).await?;
            if !global.quiet {
                eprintln!("Maintenance {} is now {}", ticket.id, ticket.status);
            }
            Ok(())
        }

        MaintenanceCommand::Cancel { id } => {
            let ticket = fleet.cancel_maintenance(id).await?;
            if !global.quiet {
                eprintln!("Maintenance {} is now {}", ticket.id, ticket.status);
            }
            Ok(())
        }
    }
}

fn print_tickets(tickets: &[Maintenance], global: &GlobalOpts) {
    let out = output::render_list(&global.output, tickets, |x| MaintenanceRow::from(x), |m| {
        m.id.to_string()
    });
    output::print_output(&out, global.quiet);
}
