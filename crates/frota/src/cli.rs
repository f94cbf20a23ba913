//! Clap derive structures for the `frota` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// frota -- fleet management from the command line
#[derive(Debug, Parser)]
#[command(
    name = "frota",
    version,
    about = "Manage your vehicle fleet from the command line",
    long_about = "A CLI client for the frota fleet-management backend.\n\n\
        Vehicles, drivers, maintenance tickets, notifications, and the\n\
        operational dashboard, all through the REST API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "FROTA_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend server URL (overrides profile)
    #[arg(long, short = 's', env = "FROTA_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FROTA_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "FROTA_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "FROTA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in, log out, and inspect the session
    Auth(AuthArgs),

    /// Manage fleet vehicles
    #[command(alias = "veh", alias = "v")]
    Vehicles(VehiclesArgs),

    /// Manage drivers
    #[command(alias = "drv", alias = "d")]
    Drivers(DriversArgs),

    /// Manage maintenance tickets
    #[command(alias = "maint", alias = "m")]
    Maintenance(MaintenanceArgs),

    /// View and manage notifications
    #[command(alias = "notif", alias = "n")]
    Notifications(NotificationsArgs),

    /// Operational dashboard views
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Export fleet reports
    Report(ReportArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared pagination arguments ──────────────────────────────────────

/// Pagination and sorting for paged list commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page number (zero-based)
    #[arg(long, default_value = "0")]
    pub page: i32,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub size: i32,

    /// Field to sort by (camelCase, e.g. "scheduledDate")
    #[arg(long, default_value = "createdAt")]
    pub sort_by: String,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub sort_dir: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in and cache the session token
    Login {
        /// Login email (prompted if omitted)
        #[arg(long, env = "FROTA_EMAIL")]
        email: Option<String>,
    },

    /// Create a new account
    Register {
        /// Display name
        #[arg(long, required = true)]
        name: String,

        /// Login email
        #[arg(long, required = true)]
        email: String,

        /// Account role
        #[arg(long, default_value = "USER")]
        role: String,
    },

    /// Log out and discard the cached token
    Logout,

    /// Show the authenticated account
    Whoami,

    /// Check whether the cached token is still accepted
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VEHICLES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VehiclesArgs {
    #[command(subcommand)]
    pub command: VehiclesCommand,
}

#[derive(Debug, Subcommand)]
pub enum VehiclesCommand {
    /// List vehicles
    #[command(alias = "ls")]
    List {
        /// Filter by status (AVAILABLE, IN_USE, MAINTENANCE, OUT_OF_SERVICE)
        #[arg(long)]
        status: Option<String>,

        /// Only vehicles available for assignment
        #[arg(long, conflicts_with = "status")]
        available: bool,

        /// Only vehicles due or overdue for maintenance
        #[arg(long, conflicts_with_all = &["status", "available"])]
        needs_maintenance: bool,

        /// Only vehicles running low on fuel
        #[arg(long, conflicts_with_all = &["status", "available", "needs_maintenance"])]
        low_fuel: bool,

        /// Filter by fuel type (GASOLINE, DIESEL, ELECTRIC, HYBRID)
        #[arg(long)]
        fuel: Option<String>,

        /// Substring match on brand, model, or license plate
        #[arg(long)]
        search: Option<String>,
    },

    /// Get vehicle details
    Get {
        /// Vehicle ID
        id: i64,
    },

    /// Register a new vehicle
    Create {
        #[arg(long, required = true)]
        brand: String,

        #[arg(long, required = true)]
        model: String,

        #[arg(long, required = true)]
        plate: String,

        #[arg(long, required = true)]
        year: i32,

        /// Fuel type (GASOLINE, DIESEL, ELECTRIC, HYBRID)
        #[arg(long, required = true)]
        fuel: String,

        /// Initial status
        #[arg(long, default_value = "AVAILABLE")]
        status: String,

        #[arg(long, default_value = "0")]
        mileage: f64,

        /// Next scheduled maintenance (YYYY-MM-DD)
        #[arg(long)]
        next_maintenance: Option<String>,
    },

    /// Update a vehicle (only the given flags change)
    Update {
        /// Vehicle ID
        id: i64,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        plate: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        fuel: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        mileage: Option<f64>,

        /// Last maintenance date (YYYY-MM-DD)
        #[arg(long)]
        last_maintenance: Option<String>,

        /// Next maintenance date (YYYY-MM-DD)
        #[arg(long)]
        next_maintenance: Option<String>,
    },

    /// Delete a vehicle
    Delete {
        /// Vehicle ID
        id: i64,
    },

    /// Assign a driver to a vehicle
    Assign {
        /// Vehicle ID
        vehicle: i64,

        /// Driver ID
        driver: i64,
    },

    /// Remove the driver assignment from a vehicle
    Unassign {
        /// Vehicle ID
        vehicle: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DRIVERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DriversArgs {
    #[command(subcommand)]
    pub command: DriversCommand,
}

#[derive(Debug, Subcommand)]
pub enum DriversCommand {
    /// List drivers
    #[command(alias = "ls")]
    List {
        /// Filter by status (AVAILABLE, ON_TRIP, OFF_DUTY, SUSPENDED)
        #[arg(long)]
        status: Option<String>,

        /// Only drivers currently available or on a trip
        #[arg(long, conflicts_with = "status")]
        active: bool,

        /// Only drivers whose license expires soon
        #[arg(long, conflicts_with_all = &["status", "active"])]
        expiring_license: bool,

        /// Substring match on name, license number, or email
        #[arg(long)]
        search: Option<String>,
    },

    /// Get driver details
    Get {
        /// Driver ID
        id: i64,
    },

    /// Register a new driver
    Create {
        #[arg(long, required = true)]
        name: String,

        #[arg(long, required = true)]
        license_number: String,

        /// License category (A-E)
        #[arg(long, required = true)]
        license_type: String,

        #[arg(long, default_value = "AVAILABLE")]
        status: String,

        #[arg(long, required = true)]
        phone: String,

        #[arg(long, required = true)]
        email: String,

        /// Hire date (YYYY-MM-DD)
        #[arg(long, required = true)]
        hire_date: String,
    },

    /// Update a driver (only the given flags change)
    Update {
        /// Driver ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        license_number: Option<String>,

        #[arg(long)]
        license_type: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a driver
    Delete {
        /// Driver ID
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MAINTENANCE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MaintenanceArgs {
    #[command(subcommand)]
    pub command: MaintenanceCommand,
}

#[derive(Debug, Subcommand)]
pub enum MaintenanceCommand {
    /// List maintenance tickets (paged)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only tickets for this vehicle
        #[arg(long)]
        vehicle: Option<i64>,

        /// Filter by status (SCHEDULED, IN_PROGRESS, COMPLETED, CANCELLED)
        #[arg(long)]
        status: Option<String>,

        /// Scheduled tickets from this date (YYYY-MM-DD, pairs with --to)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Scheduled tickets up to this date (YYYY-MM-DD, pairs with --from)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Get ticket details
    Get {
        /// Maintenance ticket ID
        id: i64,
    },

    /// Schedule a maintenance ticket
    Create {
        /// Vehicle ID
        #[arg(long, required = true)]
        vehicle: i64,

        /// Maintenance type (PREVENTIVE, CORRECTIVE, INSPECTION)
        #[arg(long = "type", required = true)]
        kind: String,

        #[arg(long, required = true)]
        description: String,

        #[arg(long, default_value = "0")]
        cost: f64,

        /// Scheduled date (YYYY-MM-DD)
        #[arg(long, required = true)]
        date: String,

        #[arg(long)]
        mechanic: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Update a ticket (only the given flags change)
    Update {
        /// Maintenance ticket ID
        id: i64,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        cost: Option<f64>,

        /// Scheduled date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        mechanic: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a ticket
    Delete {
        /// Maintenance ticket ID
        id: i64,
    },

    /// Move a scheduled ticket to IN_PROGRESS
    Start {
        /// Maintenance ticket ID
        id: i64,
    },

    /// Mark a ticket COMPLETED
    Complete {
        /// Maintenance ticket ID
        id: i64,
    },

    /// Cancel a ticket
    Cancel {
        /// Maintenance ticket ID
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NOTIFICATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List all notifications (paged)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List unread notifications
    Unread {
        /// Filter by type (e.g. MAINTENANCE_DUE, LICENSE_EXPIRING)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Filter by priority (LOW, MEDIUM, HIGH, CRITICAL)
        #[arg(long)]
        priority: Option<String>,

        /// Only CRITICAL notifications
        #[arg(long, conflicts_with_all = &["kind", "priority"])]
        critical: bool,

        /// Only HIGH and CRITICAL notifications
        #[arg(long, conflicts_with_all = &["kind", "priority", "critical"])]
        high: bool,

        /// Page number (switches to the paged unread endpoint)
        #[arg(long, conflicts_with_all = &["kind", "priority", "critical", "high"])]
        page: Option<i32>,

        /// Page size for --page
        #[arg(long, requires = "page")]
        size: Option<i32>,
    },

    /// Notifications from the last 24 hours
    Recent,

    /// Get notification details
    Get {
        /// Notification ID
        id: i64,
    },

    /// Mark one notification as read
    Read {
        /// Notification ID
        id: i64,
    },

    /// Mark all notifications as read
    ReadAll,

    /// Delete a notification
    Delete {
        /// Notification ID
        id: i64,
    },

    /// Print the unread count
    Count,

    /// Aggregate notification counters
    Stats,

    /// Ask the backend to run its alert checks now
    CheckAlerts,

    /// Poll for unread notifications and print them as they arrive
    Watch {
        /// Polling period in seconds
        #[arg(long, default_value = "30")]
        interval: u64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DASHBOARD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Headline fleet counters
    Metrics,

    /// Active dashboard alerts
    Alerts,

    /// Per-vehicle fuel consumption
    Fuel,

    /// Vehicle and driver counts per status
    Status,

    /// Best-rated drivers
    TopDrivers,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REPORT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: ReportCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Export a full fleet report (dashboard aggregates in one document)
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short = 'f')]
        out: Option<PathBuf>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },

    /// Export the configuration (passwords redacted) to a file or stdout
    Export {
        /// Destination file; prints to stdout when omitted
        #[arg(long, short = 'f')]
        out: Option<PathBuf>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
