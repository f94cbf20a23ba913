// Maintenance endpoints
//
// Paged listing, CRUD, and lifecycle transitions (start/complete/cancel)
// under /api/maintenances.

use chrono::NaiveDate;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    Maintenance, MaintenanceDraft, MaintenanceStatus, MaintenanceUpdate, Page, PageQuery,
};

impl ApiClient {
    /// List maintenance tickets, paged and sorted server-side.
    ///
    /// `GET /api/maintenances?page=&size=&sortBy=&sortDir=`
    pub async fn list_maintenances(&self, query: &PageQuery) -> Result<Page<Maintenance>, Error> {
        self.get_with_params("maintenances", &query.as_params())
            .await
    }

    /// Fetch a single maintenance ticket by id.
    ///
    /// `GET /api/maintenances/{id}`
    pub async fn get_maintenance(&self, id: i64) -> Result<Maintenance, Error> {
        self.get(&format!("maintenances/{id}")).await
    }

    /// Schedule a maintenance ticket.
    ///
    /// `POST /api/maintenances`
    pub async fn create_maintenance(&self, draft: &MaintenanceDraft) -> Result<Maintenance, Error> {
        debug!(vehicle_id = draft.vehicle_id, "creating maintenance");
        self.post("maintenances", draft).await
    }

    /// Update a maintenance ticket. `None` fields stay unchanged.
    ///
    /// `PUT /api/maintenances/{id}`
    pub async fn update_maintenance(
        &self,
        id: i64,
        update: &MaintenanceUpdate,
    ) -> Result<Maintenance, Error> {
        self.put(&format!("maintenances/{id}"), update).await
    }

    /// Delete a maintenance ticket.
    ///
    /// `DELETE /api/maintenances/{id}`
    pub async fn delete_maintenance(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting maintenance");
        self.delete(&format!("maintenances/{id}")).await
    }

    /// List all maintenance tickets for one vehicle.
    ///
    /// `GET /api/maintenances/vehicle/{vehicleId}`
    pub async fn list_maintenances_for_vehicle(
        &self,
        vehicle_id: i64,
    ) -> Result<Vec<Maintenance>, Error> {
        self.get(&format!("maintenances/vehicle/{vehicle_id}")).await
    }

    /// List maintenance tickets in a given status.
    ///
    /// `GET /api/maintenances/status/{status}`
    pub async fn list_maintenances_by_status(
        &self,
        status: MaintenanceStatus,
    ) -> Result<Vec<Maintenance>, Error> {
        self.get(&format!("maintenances/status/{status}")).await
    }

    /// List tickets scheduled inside a date window.
    ///
    /// `GET /api/maintenances/scheduled?startDate=&endDate=`
    pub async fn list_scheduled_maintenances(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Maintenance>, Error> {
        self.get_with_params(
            "maintenances/scheduled",
            &[
                ("startDate", start.to_string()),
                ("endDate", end.to_string()),
            ],
        )
        .await
    }

    /// Move a scheduled ticket into progress.
    ///
    /// `PATCH /api/maintenances/{id}/start`
    pub async fn start_maintenance(&self, id: i64) -> Result<Maintenance, Error> {
        debug!(id, "starting maintenance");
        self.patch(&format!("maintenances/{id}/start"), &serde_json::json!({}))
            .await
    }

    /// Mark an in-progress ticket as completed.
    ///
    /// `PATCH /api/maintenances/{id}/complete`
    pub async fn complete_maintenance(&self, id: i64) -> Result<Maintenance, Error> {
        debug!(id, "completing maintenance");
        self.patch(
            &format!("maintenances/{id}/complete"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Cancel a ticket that has not completed.
    ///
    /// `PATCH /api/maintenances/{id}/cancel`
    pub async fn cancel_maintenance(&self, id: i64) -> Result<Maintenance, Error> {
        debug!(id, "cancelling maintenance");
        self.patch(&format!("maintenances/{id}/cancel"), &serde_json::json!({}))
            .await
    }
}
