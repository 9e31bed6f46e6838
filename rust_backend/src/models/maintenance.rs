//! Maintenance records.
//!
//! Status changes are unconstrained: any status may follow any other.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::cold_room::ColdRoomId;

crate::define_id_type!(
    /// Identifier of a maintenance record.
    MaintenanceId
);

crate::define_label_enum!(
    MaintenanceStatus {
        Pending => "pending",
        Scheduled => "scheduled",
        Completed => "completed",
        Overdue => "overdue",
    }
);

impl Default for MaintenanceStatus {
    fn default() -> Self {
        MaintenanceStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: MaintenanceId,
    /// Weak reference; never checked against the stored cold rooms.
    pub cold_room_id: ColdRoomId,
    pub status: MaintenanceStatus,
    pub scheduled_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for scheduling a new maintenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRecord {
    pub cold_room_id: ColdRoomId,
    #[serde(default)]
    pub status: MaintenanceStatus,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewMaintenanceRecord {
    pub fn new(
        cold_room_id: impl Into<ColdRoomId>,
        scheduled_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            cold_room_id: cold_room_id.into(),
            status: MaintenanceStatus::default(),
            scheduled_date,
            completed_date: None,
            description: description.into(),
            technician: None,
            notes: None,
        }
    }

    pub fn with_status(mut self, status: MaintenanceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_technician(mut self, technician: impl Into<String>) -> Self {
        self.technician = Some(technician.into());
        self
    }

    /// Materialize the record with its assigned id, stamping both timestamps with `now`.
    pub fn into_record(self, id: MaintenanceId, now: DateTime<Utc>) -> MaintenanceRecord {
        MaintenanceRecord {
            id,
            cold_room_id: self.cold_room_id,
            status: self.status,
            scheduled_date: self.scheduled_date,
            completed_date: self.completed_date,
            description: self.description,
            technician: self.technician,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}
