//! Cold rooms and their partial-update payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::inventory::{InventoryCategory, InventoryItem};
use super::maintenance::MaintenanceStatus;

crate::define_id_type!(
    /// Identifier of a cold room (`"1"`, `"2"`, ...).
    ColdRoomId
);

crate::define_label_enum!(
    /// Unit in which capacities and quantities are measured.
    Unit {
        Kg => "kg",
        Boxes => "boxes",
        Crates => "crates",
    }
);

crate::define_label_enum!(
    /// Operational status shown on the dashboard card.
    ColdRoomStatus {
        Operational => "Operational",
        NearCapacity => "Near Capacity",
        Maintenance => "Maintenance",
        Critical => "Critical",
    }
);

/// A refrigerated storage unit.
///
/// `used_capacity <= total_capacity` is assumed by the capacity views but never
/// enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdRoom {
    pub id: ColdRoomId,
    pub location: String,
    pub total_capacity: f64,
    pub used_capacity: f64,
    pub unit: Unit,
    /// Degrees Celsius.
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    pub last_checked: DateTime<Utc>,
    pub status: ColdRoomStatus,
    pub maintenance_status: MaintenanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_maintenance: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl ColdRoom {
    /// Items of one category, in stored order.
    pub fn items_in(&self, category: InventoryCategory) -> impl Iterator<Item = &InventoryItem> {
        self.inventory
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Shallow-merge the fields present in `patch`.
    ///
    /// `patch.updated_at` is never applied; the stored timestamp is left as is.
    pub fn apply_patch(&mut self, patch: ColdRoomPatch) {
        let ColdRoomPatch {
            location,
            total_capacity,
            used_capacity,
            unit,
            temperature,
            humidity,
            last_checked,
            status,
            maintenance_status,
            next_maintenance,
            inventory,
            updated_at: _,
        } = patch;

        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = total_capacity {
            self.total_capacity = v;
        }
        if let Some(v) = used_capacity {
            self.used_capacity = v;
        }
        if let Some(v) = unit {
            self.unit = v;
        }
        if let Some(v) = temperature {
            self.temperature = v;
        }
        if humidity.is_some() {
            self.humidity = humidity;
        }
        if let Some(v) = last_checked {
            self.last_checked = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = maintenance_status {
            self.maintenance_status = v;
        }
        if next_maintenance.is_some() {
            self.next_maintenance = next_maintenance;
        }
        if let Some(v) = inventory {
            self.inventory = v;
        }
    }
}

/// Partial update for a [`ColdRoom`]. Absent fields are left untouched.
///
/// `id` and `createdAt` are not patchable. `updatedAt` is accepted so that a
/// whole record sent back by a client still deserializes, but it is dropped
/// during the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColdRoomPatch {
    pub location: Option<String>,
    pub total_capacity: Option<f64>,
    pub used_capacity: Option<f64>,
    pub unit: Option<Unit>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub last_checked: Option<DateTime<Utc>>,
    pub status: Option<ColdRoomStatus>,
    pub maintenance_status: Option<MaintenanceStatus>,
    pub next_maintenance: Option<NaiveDate>,
    pub inventory: Option<Vec<InventoryItem>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ColdRoomPatch {
    /// Parse a JSON patch, reporting the offending field path on failure.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let de = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(de)
            .map_err(|e| format!("Invalid cold room patch at '{}': {}", e.path(), e.inner()))
    }

    pub fn temperature(value: f64) -> Self {
        Self {
            temperature: Some(value),
            ..Default::default()
        }
    }

    pub fn used_capacity(value: f64) -> Self {
        Self {
            used_capacity: Some(value),
            ..Default::default()
        }
    }

    pub fn status(value: ColdRoomStatus) -> Self {
        Self {
            status: Some(value),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn room() -> ColdRoom {
        let t = Utc.with_ymd_and_hms(2024, 2, 5, 8, 0, 0).unwrap();
        ColdRoom {
            id: ColdRoomId::from("1"),
            location: "Meru Coldroom".to_string(),
            total_capacity: 5000.0,
            used_capacity: 3200.0,
            unit: Unit::Kg,
            temperature: 4.0,
            humidity: Some(85.0),
            last_checked: t,
            status: ColdRoomStatus::Operational,
            maintenance_status: MaintenanceStatus::Completed,
            next_maintenance: NaiveDate::from_ymd_opt(2024, 3, 1),
            created_at: t,
            updated_at: t,
            inventory: vec![],
        }
    }

    #[test]
    fn test_status_labels_round_trip_through_from_str() {
        assert_eq!(ColdRoomStatus::NearCapacity.as_str(), "Near Capacity");
        assert_eq!(
            "Near Capacity".parse::<ColdRoomStatus>().unwrap(),
            ColdRoomStatus::NearCapacity
        );
        assert!("near capacity".parse::<ColdRoomStatus>().is_err());
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut r = room();
        let before = r.clone();
        r.apply_patch(ColdRoomPatch::temperature(5.0));

        assert_eq!(r.temperature, 5.0);
        assert_eq!(r.used_capacity, before.used_capacity);
        assert_eq!(r.humidity, before.humidity);
        assert_eq!(r.status, before.status);
    }

    #[test]
    fn test_apply_patch_ignores_updated_at() {
        let mut r = room();
        let before = r.updated_at;
        r.apply_patch(ColdRoomPatch {
            updated_at: Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
            location: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(r.updated_at, before);
        assert_eq!(r.location, "Renamed");
    }

    #[test]
    fn test_patch_from_json_camel_case() {
        let patch = ColdRoomPatch::from_json(
            r#"{"usedCapacity": 4000, "status": "Near Capacity", "updatedAt": "2030-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(patch.used_capacity, Some(4000.0));
        assert_eq!(patch.status, Some(ColdRoomStatus::NearCapacity));
        assert!(patch.updated_at.is_some());
    }

    #[test]
    fn test_patch_from_json_reports_field_path() {
        let err = ColdRoomPatch::from_json(r#"{"status": "Frozen"}"#).unwrap_err();
        assert!(err.contains("status"), "unexpected message: {}", err);
    }
}
