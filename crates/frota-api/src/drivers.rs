// Driver endpoints
//
// CRUD plus status queries under /api/drivers.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Driver, DriverDraft, DriverStatus, DriverUpdate};

impl ApiClient {
    /// List every registered driver.
    ///
    /// `GET /api/drivers`
    pub async fn list_drivers(&self) -> Result<Vec<Driver>, Error> {
        self.get("drivers").await
    }

    /// Fetch a single driver by id.
    ///
    /// `GET /api/drivers/{id}`
    pub async fn get_driver(&self, id: i64) -> Result<Driver, Error> {
        self.get(&format!("drivers/{id}")).await
    }

    /// Register a driver.
    ///
    /// `POST /api/drivers`
    pub async fn create_driver(&self, draft: &DriverDraft) -> Result<Driver, Error> {
        debug!(license = %draft.license_number, "creating driver");
        self.post("drivers", draft).await
    }

    /// Update a driver. Fields left `None` are not sent and stay unchanged.
    ///
    /// `PUT /api/drivers/{id}`
    pub async fn update_driver(&self, id: i64, update: &DriverUpdate) -> Result<Driver, Error> {
        self.put(&format!("drivers/{id}"), update).await
    }

    /// Delete a driver.
    ///
    /// Vehicles referencing this driver keep their stale `driver_id`
    /// until re-fetched; the backend does not cascade into the client.
    ///
    /// `DELETE /api/drivers/{id}`
    pub async fn delete_driver(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting driver");
        self.delete(&format!("drivers/{id}")).await
    }

    /// List drivers in a given status.
    ///
    /// `GET /api/drivers/status/{status}`
    pub async fn list_drivers_by_status(
        &self,
        status: DriverStatus,
    ) -> Result<Vec<Driver>, Error> {
        self.get(&format!("drivers/status/{status}")).await
    }

    /// List drivers currently available for trips.
    ///
    /// `GET /api/drivers/active`
    pub async fn list_active_drivers(&self) -> Result<Vec<Driver>, Error> {
        self.get("drivers/active").await
    }

    /// List drivers whose license expires soon.
    ///
    /// `GET /api/drivers/expiring-license`
    pub async fn list_drivers_with_expiring_license(&self) -> Result<Vec<Driver>, Error> {
        self.get("drivers/expiring-license").await
    }
}
