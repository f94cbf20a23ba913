// Dashboard endpoints (read-only)
//
// Aggregated metrics and statistics under /api/dashboard. These never
// mutate anything; the CLI dashboard screen is built from them.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    DashboardAlert, DashboardMetrics, DriverStatusStatistics, FuelStatistic, TopDriver,
    VehicleStatusStatistics,
};

impl ApiClient {
    /// Headline fleet counters.
    ///
    /// `GET /api/dashboard/metrics`
    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, Error> {
        self.get("dashboard/metrics").await
    }

    /// Active system alerts.
    ///
    /// `GET /api/dashboard/alerts`
    pub async fn dashboard_alerts(&self) -> Result<Vec<DashboardAlert>, Error> {
        self.get("dashboard/alerts").await
    }

    /// Per-vehicle fuel consumption figures.
    ///
    /// `GET /api/dashboard/fuel-statistics`
    pub async fn fuel_statistics(&self) -> Result<Vec<FuelStatistic>, Error> {
        self.get("dashboard/fuel-statistics").await
    }

    /// Vehicle counts grouped by status.
    ///
    /// `GET /api/dashboard/vehicle-status-statistics`
    pub async fn vehicle_status_statistics(&self) -> Result<VehicleStatusStatistics, Error> {
        self.get("dashboard/vehicle-status-statistics").await
    }

    /// Driver counts grouped by status.
    ///
    /// `GET /api/dashboard/driver-status-statistics`
    pub async fn driver_status_statistics(&self) -> Result<DriverStatusStatistics, Error> {
        self.get("dashboard/driver-status-statistics").await
    }

    /// Best-rated drivers.
    ///
    /// `GET /api/dashboard/top-drivers`
    pub async fn top_drivers(&self) -> Result<Vec<TopDriver>, Error> {
        self.get("dashboard/top-drivers").await
    }
}
