use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::models::{
    ColdRoomId, MaintenanceId, MaintenanceRecord, MaintenanceStatus, NewMaintenanceRecord,
};

/// Repository trait for maintenance records.
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// List all maintenance records in insertion order.
    async fn list_maintenance(&self) -> RepositoryResult<Vec<MaintenanceRecord>>;

    /// Records whose `cold_room_id` equals `cold_room_id`.
    ///
    /// An id with no history yields an empty list, not an error.
    async fn maintenance_for_cold_room(
        &self,
        cold_room_id: &ColdRoomId,
    ) -> RepositoryResult<Vec<MaintenanceRecord>>;

    /// Append a new record with the next sequential id.
    ///
    /// The cold room reference is not validated.
    async fn insert_maintenance(
        &self,
        record: NewMaintenanceRecord,
    ) -> RepositoryResult<MaintenanceRecord>;

    /// Set the status of a record, bumping `updated_at`.
    ///
    /// `completed_date` is recorded when moving to `Completed` and cleared
    /// when moving away from it.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    async fn set_maintenance_status(
        &self,
        id: &MaintenanceId,
        status: MaintenanceStatus,
        on: NaiveDate,
    ) -> RepositoryResult<MaintenanceRecord>;
}
