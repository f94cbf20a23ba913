// Vehicle endpoints
//
// CRUD plus status and condition queries under /api/vehicles. Driver
// assignment has no dedicated route; it rides the partial update via
// `VehicleUpdate::driver_id`.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Vehicle, VehicleDraft, VehicleStatus, VehicleUpdate};

impl ApiClient {
    /// List every vehicle in the fleet.
    ///
    /// `GET /api/vehicles`
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.get("vehicles").await
    }

    /// Fetch a single vehicle by id.
    ///
    /// `GET /api/vehicles/{id}`
    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, Error> {
        self.get(&format!("vehicles/{id}")).await
    }

    /// Create a vehicle. The backend assigns the id and timestamps.
    ///
    /// `POST /api/vehicles`
    pub async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, Error> {
        debug!(plate = %draft.license_plate, "creating vehicle");
        self.post("vehicles", draft).await
    }

    /// Update a vehicle. Fields left `None` are not sent and stay unchanged.
    ///
    /// `PUT /api/vehicles/{id}`
    pub async fn update_vehicle(&self, id: i64, update: &VehicleUpdate) -> Result<Vehicle, Error> {
        self.put(&format!("vehicles/{id}"), update).await
    }

    /// Delete a vehicle.
    ///
    /// `DELETE /api/vehicles/{id}`
    pub async fn delete_vehicle(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting vehicle");
        self.delete(&format!("vehicles/{id}")).await
    }

    /// List vehicles in a given status.
    ///
    /// `GET /api/vehicles/status/{status}`
    pub async fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> Result<Vec<Vehicle>, Error> {
        self.get(&format!("vehicles/status/{status}")).await
    }

    /// List vehicles currently available for assignment.
    ///
    /// `GET /api/vehicles/available`
    pub async fn list_available_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.get("vehicles/available").await
    }

    /// List vehicles due or overdue for maintenance.
    ///
    /// `GET /api/vehicles/needing-maintenance`
    pub async fn list_vehicles_needing_maintenance(&self) -> Result<Vec<Vehicle>, Error> {
        self.get("vehicles/needing-maintenance").await
    }

    /// List vehicles running low on fuel.
    ///
    /// `GET /api/vehicles/low-fuel`
    pub async fn list_low_fuel_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.get("vehicles/low-fuel").await
    }
}
