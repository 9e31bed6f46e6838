//! Selections over cold rooms, inventory and maintenance records.
//!
//! Every filter takes a [`Selection`]; `Selection::All` (parsed from the
//! `"all"` sentinel) bypasses the filter.

use std::str::FromStr;

use crate::models::{
    ColdRoom, ColdRoomId, ColdRoomStatus, InventoryCategory, InventoryItem, MaintenanceRecord,
    MaintenanceStatus,
};

/// Sentinel accepted by [`Selection::from_str`] for "no filter".
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Filter maintenance records by status.
pub fn filter_maintenance<'a>(
    records: &'a [MaintenanceRecord],
    status: &Selection<MaintenanceStatus>,
) -> Vec<&'a MaintenanceRecord> {
    records.iter().filter(|r| status.matches(&r.status)).collect()
}

/// Filter maintenance records by cold room.
pub fn maintenance_for_room<'a>(
    records: &'a [MaintenanceRecord],
    room: &Selection<ColdRoomId>,
) -> Vec<&'a MaintenanceRecord> {
    records
        .iter()
        .filter(|r| room.matches(&r.cold_room_id))
        .collect()
}

/// Inventory items of the selected rooms and category, room by room in
/// stored order. A room id that matches nothing yields an empty list.
pub fn inventory_items<'a>(
    rooms: &'a [ColdRoom],
    room: &Selection<ColdRoomId>,
    category: &Selection<InventoryCategory>,
) -> Vec<&'a InventoryItem> {
    rooms
        .iter()
        .filter(|r| room.matches(&r.id))
        .flat_map(|r| r.inventory.iter())
        .filter(|item| category.matches(&item.category))
        .collect()
}

/// Rooms whose status matches `status`.
pub fn rooms_with_status<'a>(
    rooms: &'a [ColdRoom],
    status: &Selection<ColdRoomStatus>,
) -> Vec<&'a ColdRoom> {
    rooms.iter().filter(|r| status.matches(&r.status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures;
    use chrono::Utc;

    #[test]
    fn test_selection_parses_sentinel() {
        let all: Selection<MaintenanceStatus> = "all".parse().unwrap();
        assert_eq!(all, Selection::All);

        let done: Selection<MaintenanceStatus> = "completed".parse().unwrap();
        assert_eq!(done, Selection::Only(MaintenanceStatus::Completed));

        assert!("everything".parse::<Selection<MaintenanceStatus>>().is_err());
    }

    #[test]
    fn test_filter_maintenance_by_status() {
        let f = fixtures::seed(Utc::now());
        assert_eq!(filter_maintenance(&f.maintenance, &Selection::All).len(), 2);

        let completed = filter_maintenance(&f.maintenance, &MaintenanceStatus::Completed.into());
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id.as_str(), "1");

        assert!(filter_maintenance(&f.maintenance, &MaintenanceStatus::Overdue.into()).is_empty());
    }

    #[test]
    fn test_inventory_across_all_rooms() {
        let f = fixtures::seed(Utc::now());
        let incoming = inventory_items(
            &f.cold_rooms,
            &Selection::All,
            &InventoryCategory::Incoming.into(),
        );
        let names: Vec<_> = incoming.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(names, vec!["Potatoes", "Cabbages"]);
    }

    #[test]
    fn test_inventory_for_one_room() {
        let f = fixtures::seed(Utc::now());
        let room = Selection::Only(ColdRoomId::from("2"));
        let pickups = inventory_items(&f.cold_rooms, &room, &InventoryCategory::PickupSchedule.into());
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].client.as_deref(), Some("Fresh Foods Ltd"));

        let everything = inventory_items(&f.cold_rooms, &room, &Selection::All);
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn test_inventory_unknown_room_is_empty() {
        let f = fixtures::seed(Utc::now());
        let items = inventory_items(
            &f.cold_rooms,
            &Selection::Only(ColdRoomId::from("999")),
            &Selection::All,
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_rooms_with_status() {
        let f = fixtures::seed(Utc::now());
        let near = rooms_with_status(&f.cold_rooms, &ColdRoomStatus::NearCapacity.into());
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].location, "Nakuru Coldroom");

        assert_eq!(rooms_with_status(&f.cold_rooms, &Selection::All).len(), 2);
        assert!(rooms_with_status(&f.cold_rooms, &ColdRoomStatus::Critical.into()).is_empty());
    }

    #[test]
    fn test_maintenance_for_room() {
        let f = fixtures::seed(Utc::now());
        let records = maintenance_for_room(&f.maintenance, &Selection::Only(ColdRoomId::from("2")));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "Temperature system check");
    }
}
