//! Domain layer between `frota-api` and UI consumers (the CLI).
//!
//! This crate owns session handling, background polling, and the
//! high-level facade for the frota workspace:
//!
//! - **[`Fleet`]** — Central facade wrapping the shared [`frota_api::ApiClient`].
//!   Typed operations per entity, error translation into [`CoreError`], and
//!   session invalidation when the backend rejects the token.
//!   [`Fleet::oneshot()`] builds a facade for single CLI invocations with no
//!   background tasks.
//!
//! - **[`Session`]** — Auth session holder. Publishes [`SessionState`]
//!   transitions over a `tokio::sync::watch` channel so consumers subscribe
//!   explicitly instead of reading ambient globals. Persists the bearer token
//!   to a cache file between invocations.
//!
//! - **[`Notifier`]** — Background notification poller. Fetches unread
//!   summaries and stats on a fixed period and publishes an immutable
//!   [`NotificationFeed`] snapshot through a `watch` channel. Overlapping
//!   fetches are skipped, never queued.

pub mod config;
pub mod error;
pub mod fleet;
pub mod notifier;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{Credentials, FleetConfig, TlsVerification};
pub use error::CoreError;
pub use fleet::Fleet;
pub use notifier::{NotificationFeed, Notifier};
pub use session::{Session, SessionState};

// Re-export wire types at the crate root: the backend's records are the
// domain vocabulary, exchanged verbatim.
pub use frota_api::types::{
    AuthResponse, DashboardAlert, DashboardMetrics, Driver, DriverDraft, DriverStatus,
    DriverStatusStatistics, DriverUpdate, FuelStatistic, FuelType, LicenseType, Maintenance,
    MaintenanceDraft, MaintenanceStatus, MaintenanceType, MaintenanceUpdate, Notification,
    NotificationDraft, NotificationPriority, NotificationStats, NotificationSummary,
    NotificationType, Page, PageQuery, RegisterRequest, TopDriver, User, Vehicle, VehicleDraft,
    VehicleStatus, VehicleStatusStatistics, VehicleUpdate,
};
