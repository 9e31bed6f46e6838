//! View data for the dashboard: room cards, room details, critical stock and
//! the maintenance overview.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::capacity::capacity_percentage;
use super::colors::{cold_room_status_color, StatusColor};
use super::filtering::{filter_maintenance, Selection};
use crate::models::{
    ColdRoom, ColdRoomId, ColdRoomStatus, InventoryCategory, InventoryItem, InventoryItemId,
    MaintenanceRecord, MaintenanceStatus, TemperatureUnit,
};

/// Whole days from `today` until `expiry`; negative once expired.
pub fn days_left(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// A critical item with its remaining shelf life.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalItemView {
    pub id: InventoryItemId,
    pub cold_room_id: ColdRoomId,
    pub item: String,
    pub quantity: String,
    pub expiry_date: Option<NaiveDate>,
    /// `None` when the item carries no expiry date.
    pub days_left: Option<i64>,
}

/// Critical items of one room, soonest expiry first.
///
/// Days left are always derived from `expiry_date`, so they cannot disagree.
pub fn critical_items(room: &ColdRoom, today: NaiveDate) -> Vec<CriticalItemView> {
    let mut items: Vec<CriticalItemView> = room
        .items_in(InventoryCategory::Critical)
        .map(|item| CriticalItemView {
            id: item.id.clone(),
            cold_room_id: room.id.clone(),
            item: item.item.clone(),
            quantity: item.quantity_label(),
            expiry_date: item.expiry_date,
            days_left: item.expiry_date.map(|d| days_left(d, today)),
        })
        .collect();
    // Items without an expiry date go last.
    items.sort_by_key(|i| (i.days_left.is_none(), i.days_left));
    items
}

/// Critical items across every room, soonest expiry first.
pub fn all_critical_items(rooms: &[ColdRoom], today: NaiveDate) -> Vec<CriticalItemView> {
    let mut items: Vec<CriticalItemView> = rooms
        .iter()
        .flat_map(|room| critical_items(room, today))
        .collect();
    items.sort_by_key(|i| (i.days_left.is_none(), i.days_left));
    items
}

/// Summary card for one room.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCard {
    pub id: ColdRoomId,
    pub location: String,
    pub status: ColdRoomStatus,
    pub status_color: StatusColor,
    pub capacity_percentage: String,
    pub temperature: String,
    pub last_checked: DateTime<Utc>,
}

pub fn room_card(room: &ColdRoom, unit: TemperatureUnit) -> RoomCard {
    RoomCard {
        id: room.id.clone(),
        location: room.location.clone(),
        status: room.status,
        status_color: cold_room_status_color(room.status),
        capacity_percentage: capacity_percentage(room.used_capacity, room.total_capacity),
        temperature: unit.display(room.temperature),
        last_checked: room.last_checked,
    }
}

pub fn room_cards(rooms: &[ColdRoom], unit: TemperatureUnit) -> Vec<RoomCard> {
    rooms.iter().map(|r| room_card(r, unit)).collect()
}

/// Shown when a room's maintenance is pending or overdue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlert {
    pub status: MaintenanceStatus,
    pub due: Option<NaiveDate>,
}

impl MaintenanceAlert {
    pub fn message(&self) -> String {
        match self.due {
            Some(due) => format!("Scheduled maintenance due on {}", due),
            None => "Maintenance required".to_string(),
        }
    }
}

pub fn maintenance_alert(room: &ColdRoom) -> Option<MaintenanceAlert> {
    match room.maintenance_status {
        MaintenanceStatus::Pending | MaintenanceStatus::Overdue => Some(MaintenanceAlert {
            status: room.maintenance_status,
            due: room.next_maintenance,
        }),
        MaintenanceStatus::Scheduled | MaintenanceStatus::Completed => None,
    }
}

/// One row of an inventory table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub date: Option<NaiveDate>,
    pub item: String,
    pub quantity: String,
    pub counterparty: Option<String>,
}

impl From<&InventoryItem> for InventoryRow {
    fn from(item: &InventoryItem) -> Self {
        Self {
            date: item.date,
            item: item.item.clone(),
            quantity: item.quantity_label(),
            counterparty: item.counterparty().map(str::to_string),
        }
    }
}

/// Everything the room detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetail {
    pub card: RoomCard,
    pub maintenance_alert: Option<MaintenanceAlert>,
    pub critical: Vec<CriticalItemView>,
    pub incoming: Vec<InventoryRow>,
    pub outgoing: Vec<InventoryRow>,
    pub pickups: Vec<InventoryRow>,
}

pub fn room_detail(room: &ColdRoom, today: NaiveDate, unit: TemperatureUnit) -> RoomDetail {
    let rows = |category: InventoryCategory| -> Vec<InventoryRow> {
        room.items_in(category).map(InventoryRow::from).collect()
    };
    RoomDetail {
        card: room_card(room, unit),
        maintenance_alert: maintenance_alert(room),
        critical: critical_items(room, today),
        incoming: rows(InventoryCategory::Incoming),
        outgoing: rows(InventoryCategory::Outgoing),
        pickups: rows(InventoryCategory::PickupSchedule),
    }
}

/// Record counts per maintenance status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceOverview {
    pub all: usize,
    pub pending: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl MaintenanceOverview {
    pub fn count(&self, status: &Selection<MaintenanceStatus>) -> usize {
        match status {
            Selection::All => self.all,
            Selection::Only(MaintenanceStatus::Pending) => self.pending,
            Selection::Only(MaintenanceStatus::Scheduled) => self.scheduled,
            Selection::Only(MaintenanceStatus::Completed) => self.completed,
            Selection::Only(MaintenanceStatus::Overdue) => self.overdue,
        }
    }
}

pub fn maintenance_overview(records: &[MaintenanceRecord]) -> MaintenanceOverview {
    let count = |s: MaintenanceStatus| filter_maintenance(records, &Selection::Only(s)).len();
    MaintenanceOverview {
        all: records.len(),
        pending: count(MaintenanceStatus::Pending),
        scheduled: count(MaintenanceStatus::Scheduled),
        completed: count(MaintenanceStatus::Completed),
        overdue: count(MaintenanceStatus::Overdue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_left() {
        assert_eq!(days_left(ymd(2024, 2, 10), ymd(2024, 2, 5)), 5);
        assert_eq!(days_left(ymd(2024, 2, 5), ymd(2024, 2, 5)), 0);
        assert_eq!(days_left(ymd(2024, 2, 8), ymd(2024, 2, 10)), -2);
    }

    #[test]
    fn test_critical_items_computed_from_expiry() {
        let f = fixtures::seed(Utc::now());
        let meru = &f.cold_rooms[0];
        let items = critical_items(meru, ymd(2024, 2, 5));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item, "Tomatoes");
        assert_eq!(items[0].quantity, "200kg");
        assert_eq!(items[0].days_left, Some(5));
    }

    #[test]
    fn test_all_critical_items_sorted_by_urgency() {
        let f = fixtures::seed(Utc::now());
        let items = all_critical_items(&f.cold_rooms, ymd(2024, 2, 5));
        let names: Vec<_> = items.iter().map(|i| (i.item.as_str(), i.days_left)).collect();
        assert_eq!(names, vec![("Cabbages", Some(3)), ("Tomatoes", Some(5))]);
    }

    #[test]
    fn test_room_card() {
        let f = fixtures::seed(Utc::now());
        let card = room_card(&f.cold_rooms[0], TemperatureUnit::Celsius);
        assert_eq!(card.location, "Meru Coldroom");
        assert_eq!(card.capacity_percentage, "64.0");
        assert_eq!(card.status_color, StatusColor::Green);
        assert_eq!(card.temperature, "4°C");

        let nakuru = room_card(&f.cold_rooms[1], TemperatureUnit::Celsius);
        assert_eq!(nakuru.status_color, StatusColor::Yellow);
        assert_eq!(nakuru.temperature, "3.5°C");
    }

    #[test]
    fn test_maintenance_alert_only_for_pending_or_overdue() {
        let f = fixtures::seed(Utc::now());
        assert!(maintenance_alert(&f.cold_rooms[0]).is_none());

        let alert = maintenance_alert(&f.cold_rooms[1]).unwrap();
        assert_eq!(alert.due, Some(ymd(2024, 2, 15)));
        assert_eq!(alert.message(), "Scheduled maintenance due on 2024-02-15");
    }

    #[test]
    fn test_room_detail_sections() {
        let f = fixtures::seed(Utc::now());
        let detail = room_detail(&f.cold_rooms[1], ymd(2024, 2, 5), TemperatureUnit::Fahrenheit);
        assert!(detail.maintenance_alert.is_some());
        assert_eq!(detail.incoming.len(), 1);
        assert_eq!(detail.incoming[0].counterparty.as_deref(), Some("Peter Kamau"));
        assert_eq!(detail.outgoing[0].counterparty.as_deref(), Some("Super Market"));
        assert_eq!(detail.pickups[0].date, Some(ymd(2024, 2, 7)));
        assert_eq!(detail.critical[0].days_left, Some(3));
        assert_eq!(detail.card.temperature, "38.3°F");
    }

    #[test]
    fn test_maintenance_overview_counts() {
        let f = fixtures::seed(Utc::now());
        let overview = maintenance_overview(&f.maintenance);
        assert_eq!(overview.all, 2);
        assert_eq!(overview.pending, 1);
        assert_eq!(overview.completed, 1);
        assert_eq!(overview.scheduled, 0);
        assert_eq!(overview.count(&Selection::All), 2);
        assert_eq!(overview.count(&MaintenanceStatus::Completed.into()), 1);
    }
}
