//! Command dispatch: bridges CLI args -> Fleet facade -> output formatting.

pub mod auth;
pub mod config_cmd;
pub mod dashboard;
pub mod drivers;
pub mod maintenance;
pub mod notifications;
pub mod report;
pub mod util;
pub mod vehicles;

use frota_core::Fleet;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, fleet: &Fleet, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Auth(args) => auth::handle(fleet, args, global).await,
        Command::Vehicles(args) => vehicles::handle(fleet, args, global).await,
        Command::Drivers(args) => drivers::handle(fleet, args, global).await,
        Command::Maintenance(args) => maintenance::handle(fleet, args, global).await,
        Command::Notifications(args) => notifications::handle(fleet, args, global).await,
        Command::Dashboard(args) => dashboard::handle(fleet, args, global).await,
        Command::Report(args) => report::handle(fleet, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
