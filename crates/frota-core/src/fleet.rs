// ── Fleet facade ──
//
// The main entry point for consumers. Wraps the shared ApiClient with
// typed operations, translates transport errors into CoreError, and
// clears the session when the backend rejects the token.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use frota_api::transport::TransportConfig;
use frota_api::ApiClient;
use frota_api::types::{
    DashboardAlert, DashboardMetrics, Driver, DriverDraft, DriverStatus, DriverStatusStatistics,
    DriverUpdate, FuelStatistic, Maintenance, MaintenanceDraft, MaintenanceStatus,
    MaintenanceUpdate, Notification, NotificationDraft, NotificationPriority, NotificationStats,
    NotificationSummary, NotificationType, Page, PageQuery, TopDriver, Vehicle, VehicleDraft,
    VehicleStatus, VehicleStatusStatistics, VehicleUpdate,
};

use crate::config::FleetConfig;
use crate::error::CoreError;
use crate::notifier::Notifier;
use crate::session::Session;

/// Facade over the fleet backend.
///
/// Cheaply cloneable via `Arc`. Owns the shared API client, the auth
/// session, and the notification poller lifecycle.
#[derive(Clone)]
pub struct Fleet {
    inner: Arc<FleetInner>,
}

struct FleetInner {
    config: FleetConfig,
    api: Arc<ApiClient>,
    session: Session,
    notifier: Notifier,
    cancel: CancellationToken,
    task_handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Fleet {
    /// Build a facade from configuration. Does not touch the network;
    /// call [`Session::restore`] or [`Session::login`] to authenticate.
    pub fn new(config: FleetConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: config.tls_mode(),
            timeout: config.timeout,
        };
        let api = Arc::new(ApiClient::new(config.url.as_str(), &transport)?);
        let session = Session::new(Arc::clone(&api), config.token_cache.clone());
        let notifier = Notifier::new(Arc::clone(&api));

        Ok(Self {
            inner: Arc::new(FleetInner {
                config,
                api,
                session,
                notifier,
                cancel: CancellationToken::new(),
                task_handles: Mutex::new(Vec::new()),
            }),
        })
    }

    /// Build a facade for a single CLI invocation: identical wiring,
    /// but the caller promises not to spawn background tasks.
    pub fn oneshot(config: FleetConfig) -> Result<Self, CoreError> {
        Self::new(config)
    }

    /// Access the configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.inner.config
    }

    /// The auth session holder.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// The notification poller.
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    // ── Background tasks ─────────────────────────────────────────────

    /// Start the notification polling task at the configured period.
    ///
    /// No-op when `poll_interval_secs` is 0.
    pub async fn spawn_notifier(&self) {
        let secs = self.inner.config.poll_interval_secs;
        if secs == 0 {
            debug!("notification polling disabled");
            return;
        }
        info!(interval_secs = secs, "starting notification poller");
        let handle = self
            .inner
            .notifier
            .spawn(secs, self.inner.cancel.child_token());
        self.inner.task_handles.lock().await.push(handle);
    }

    /// Stop background tasks and wait for them to finish.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        let mut handles = self.inner.task_handles.lock().await;
        for handle in handles.drain(..) {
            let _ = handle.await;
        }
    }

    // ── Error translation ────────────────────────────────────────────

    /// Translate a wire-level result, tearing down the session when the
    /// backend rejected the token.
    async fn finish<T>(&self, result: Result<T, frota_api::Error>) -> Result<T, CoreError> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                if matches!(e, frota_api::Error::Unauthorized) {
                    self.inner.session.invalidate().await;
                }
                Err(e.into())
            }
        }
    }

    fn not_found(entity_type: &'static str, id: i64) -> impl FnOnce(CoreError) -> CoreError {
        move |err| match err {
            CoreError::NotFound { .. } => CoreError::NotFound {
                entity_type: entity_type.to_owned(),
                identifier: id.to_string(),
            },
            other => other,
        }
    }

    // ── Vehicles ─────────────────────────────────────────────────────

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, CoreError> {
        self.finish(self.inner.api.list_vehicles().await).await
    }

    pub async fn vehicle(&self, id: i64) -> Result<Vehicle, CoreError> {
        self.finish(self.inner.api.get_vehicle(id).await)
            .await
            .map_err(Self::not_found("vehicle", id))
    }

    pub async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, CoreError> {
        self.finish(self.inner.api.create_vehicle(draft).await).await
    }

    pub async fn update_vehicle(
        &self,
        id: i64,
        update: &VehicleUpdate,
    ) -> Result<Vehicle, CoreError> {
        self.finish(self.inner.api.update_vehicle(id, update).await)
            .await
            .map_err(Self::not_found("vehicle", id))
    }

    pub async fn remove_vehicle(&self, id: i64) -> Result<(), CoreError> {
        self.finish(self.inner.api.delete_vehicle(id).await)
            .await
            .map_err(Self::not_found("vehicle", id))
    }

    pub async fn vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> Result<Vec<Vehicle>, CoreError> {
        self.finish(self.inner.api.list_vehicles_by_status(status).await)
            .await
    }

    pub async fn available_vehicles(&self) -> Result<Vec<Vehicle>, CoreError> {
        self.finish(self.inner.api.list_available_vehicles().await)
            .await
    }

    /// Assign a driver to a vehicle.
    ///
    /// The backend has no dedicated assignment route; this writes
    /// `driverId` through the partial-update contract.
    pub async fn assign_driver(
        &self,
        vehicle_id: i64,
        driver_id: i64,
    ) -> Result<Vehicle, CoreError> {
        let update = VehicleUpdate {
            driver_id: Some(Some(driver_id)),
            ..VehicleUpdate::default()
        };
        self.finish(self.inner.api.update_vehicle(vehicle_id, &update).await)
            .await
            .map_err(Self::not_found("vehicle", vehicle_id))
    }

    /// Clear a vehicle's driver assignment by sending an explicit
    /// `driverId: null` in the update body.
    pub async fn unassign_driver(&self, vehicle_id: i64) -> Result<Vehicle, CoreError> {
        let update = VehicleUpdate {
            driver_id: Some(None),
            ..VehicleUpdate::default()
        };
        self.finish(self.inner.api.update_vehicle(vehicle_id, &update).await)
            .await
            .map_err(Self::not_found("vehicle", vehicle_id))
    }

    pub async fn vehicles_needing_maintenance(&self) -> Result<Vec<Vehicle>, CoreError> {
        self.finish(self.inner.api.list_vehicles_needing_maintenance().await)
            .await
    }

    pub async fn low_fuel_vehicles(&self) -> Result<Vec<Vehicle>, CoreError> {
        self.finish(self.inner.api.list_low_fuel_vehicles().await)
            .await
    }

    // ── Drivers ──────────────────────────────────────────────────────

    pub async fn drivers(&self) -> Result<Vec<Driver>, CoreError> {
        self.finish(self.inner.api.list_drivers().await).await
    }

    pub async fn driver(&self, id: i64) -> Result<Driver, CoreError> {
        self.finish(self.inner.api.get_driver(id).await)
            .await
            .map_err(Self::not_found("driver", id))
    }

    pub async fn create_driver(&self, draft: &DriverDraft) -> Result<Driver, CoreError> {
        self.finish(self.inner.api.create_driver(draft).await).await
    }

    pub async fn update_driver(&self, id: i64, update: &DriverUpdate) -> Result<Driver, CoreError> {
        self.finish(self.inner.api.update_driver(id, update).await)
            .await
            .map_err(Self::not_found("driver", id))
    }

    /// Delete a driver.
    ///
    /// Vehicles still referencing the driver keep their stale
    /// `driver_id` until re-fetched; nothing cascades client-side.
    pub async fn remove_driver(&self, id: i64) -> Result<(), CoreError> {
        self.finish(self.inner.api.delete_driver(id).await)
            .await
            .map_err(Self::not_found("driver", id))
    }

    pub async fn drivers_by_status(&self, status: DriverStatus) -> Result<Vec<Driver>, CoreError> {
        self.finish(self.inner.api.list_drivers_by_status(status).await)
            .await
    }

    pub async fn active_drivers(&self) -> Result<Vec<Driver>, CoreError> {
        self.finish(self.inner.api.list_active_drivers().await).await
    }

    pub async fn drivers_with_expiring_license(&self) -> Result<Vec<Driver>, CoreError> {
        self.finish(self.inner.api.list_drivers_with_expiring_license().await)
            .await
    }

    // ── Maintenance ──────────────────────────────────────────────────

    pub async fn maintenances(&self, query: &PageQuery) -> Result<Page<Maintenance>, CoreError> {
        self.finish(self.inner.api.list_maintenances(query).await)
            .await
    }

    pub async fn maintenance(&self, id: i64) -> Result<Maintenance, CoreError> {
        self.finish(self.inner.api.get_maintenance(id).await)
            .await
            .map_err(Self::not_found("maintenance", id))
    }

    pub async fn create_maintenance(
        &self,
        draft: &MaintenanceDraft,
    ) -> Result<Maintenance, CoreError> {
        self.finish(self.inner.api.create_maintenance(draft).await)
            .await
    }

    pub async fn update_maintenance(
        &self,
        id: i64,
        update: &MaintenanceUpdate,
    ) -> Result<Maintenance, CoreError> {
        self.finish(self.inner.api.update_maintenance(id, update).await)
            .await
            .map_err(Self::not_found("maintenance", id))
    }

    pub async fn remove_maintenance(&self, id: i64) -> Result<(), CoreError> {
        self.finish(self.inner.api.delete_maintenance(id).await)
            .await
            .map_err(Self::not_found("maintenance", id))
    }

    pub async fn maintenances_for_vehicle(
        &self,
        vehicle_id: i64,
    ) -> Result<Vec<Maintenance>, CoreError> {
        self.finish(self.inner.api.list_maintenances_for_vehicle(vehicle_id).await)
            .await
    }

    pub async fn maintenances_by_status(
        &self,
        status: MaintenanceStatus,
    ) -> Result<Vec<Maintenance>, CoreError> {
        self.finish(self.inner.api.list_maintenances_by_status(status).await)
            .await
    }

    pub async fn scheduled_maintenances(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Maintenance>, CoreError> {
        self.finish(self.inner.api.list_scheduled_maintenances(start, end).await)
            .await
    }

    pub async fn start_maintenance(&self, id: i64) -> Result<Maintenance, CoreError> {
        self.finish(self.inner.api.start_maintenance(id).await)
            .await
            .map_err(Self::not_found("maintenance", id))
    }

    pub async fn complete_maintenance(&self, id: i64) -> Result<Maintenance, CoreError> {
        self.finish(self.inner.api.complete_maintenance(id).await)
            .await
            .map_err(Self::not_found("maintenance", id))
    }

    pub async fn cancel_maintenance(&self, id: i64) -> Result<Maintenance, CoreError> {
        self.finish(self.inner.api.cancel_maintenance(id).await)
            .await
            .map_err(Self::not_found("maintenance", id))
    }

    // ── Notifications ────────────────────────────────────────────────

    pub async fn notifications(
        &self,
        query: &PageQuery,
    ) -> Result<Page<Notification>, CoreError> {
        self.finish(self.inner.api.list_notifications(query).await)
            .await
    }

    pub async fn notification(&self, id: i64) -> Result<Notification, CoreError> {
        self.finish(self.inner.api.get_notification(id).await)
            .await
            .map_err(Self::not_found("notification", id))
    }

    pub async fn create_notification(
        &self,
        draft: &NotificationDraft,
    ) -> Result<Notification, CoreError> {
        self.finish(self.inner.api.create_notification(draft).await)
            .await
    }

    pub async fn remove_notification(&self, id: i64) -> Result<(), CoreError> {
        self.finish(self.inner.api.delete_notification(id).await)
            .await
            .map_err(Self::not_found("notification", id))
    }

    pub async fn unread_notifications(&self) -> Result<Vec<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_unread_notifications().await)
            .await
    }

    pub async fn unread_count(&self) -> Result<i64, CoreError> {
        self.finish(self.inner.api.unread_count().await).await
    }

    pub async fn unread_notifications_paged(
        &self,
        page: i32,
        size: i32,
    ) -> Result<Page<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_unread_paged(page, size).await)
            .await
    }

    pub async fn notifications_by_type(
        &self,
        kind: NotificationType,
    ) -> Result<Vec<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_notifications_by_type(kind).await)
            .await
    }

    pub async fn notifications_by_priority(
        &self,
        priority: NotificationPriority,
    ) -> Result<Vec<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_notifications_by_priority(priority).await)
            .await
    }

    pub async fn critical_notifications(&self) -> Result<Vec<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_critical_notifications().await)
            .await
    }

    pub async fn high_priority_notifications(&self) -> Result<Vec<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_high_priority_notifications().await)
            .await
    }

    pub async fn recent_notifications(&self) -> Result<Vec<NotificationSummary>, CoreError> {
        self.finish(self.inner.api.list_recent_notifications().await)
            .await
    }

    pub async fn mark_read(&self, id: i64) -> Result<Notification, CoreError> {
        self.finish(self.inner.api.mark_notification_read(id).await)
            .await
            .map_err(Self::not_found("notification", id))
    }

    pub async fn mark_all_read(&self) -> Result<(), CoreError> {
        self.finish(self.inner.api.mark_all_notifications_read().await)
            .await
    }

    pub async fn notification_stats(&self) -> Result<NotificationStats, CoreError> {
        self.finish(self.inner.api.notification_stats().await).await
    }

    pub async fn check_alerts(&self) -> Result<(), CoreError> {
        self.finish(self.inner.api.check_alerts().await).await
    }

    // ── Dashboard ────────────────────────────────────────────────────

    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, CoreError> {
        self.finish(self.inner.api.dashboard_metrics().await).await
    }

    pub async fn dashboard_alerts(&self) -> Result<Vec<DashboardAlert>, CoreError> {
        self.finish(self.inner.api.dashboard_alerts().await).await
    }

    pub async fn fuel_statistics(&self) -> Result<Vec<FuelStatistic>, CoreError> {
        self.finish(self.inner.api.fuel_statistics().await).await
    }

    pub async fn vehicle_status_statistics(&self) -> Result<VehicleStatusStatistics, CoreError> {
        self.finish(self.inner.api.vehicle_status_statistics().await)
            .await
    }

    pub async fn driver_status_statistics(&self) -> Result<DriverStatusStatistics, CoreError> {
        self.finish(self.inner.api.driver_status_statistics().await)
            .await
    }

    pub async fn top_drivers(&self) -> Result<Vec<TopDriver>, CoreError> {
        self.finish(self.inner.api.top_drivers().await).await
    }
}

impl std::fmt::Debug for Fleet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fleet")
            .field("url", &self.inner.config.url.as_str())
            .finish_non_exhaustive()
    }
}
