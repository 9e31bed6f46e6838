//! Fixture records seeded into a fresh store.
//!
//! Record-level timestamps that the dashboard treats as "live" (`last_checked`,
//! inventory `created_at`, users' `last_login`) are stamped with `now`; the
//! rest are fixed dates.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::{
    ColdRoom, ColdRoomId, ColdRoomStatus, DateRange, InventoryCategory, InventoryItem,
    InventoryItemId, ItemStatus, MaintenanceId, MaintenanceRecord, MaintenanceStatus, Report,
    ReportFormat, ReportId, ReportType, Unit, User, UserId, UserRole,
};

/// The complete seeded data set.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub cold_rooms: Vec<ColdRoom>,
    pub maintenance: Vec<MaintenanceRecord>,
    pub reports: Vec<Report>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    ymd(year, month, day).and_time(NaiveTime::MIN).and_utc()
}

/// Build the seeded data set, stamping live timestamps with `now`.
pub fn seed(now: DateTime<Utc>) -> Fixtures {
    Fixtures {
        users: users(now),
        cold_rooms: cold_rooms(now),
        maintenance: maintenance(),
        reports: reports(),
    }
}

fn users(now: DateTime<Utc>) -> Vec<User> {
    let created = midnight(2024, 1, 1);
    vec![
        User {
            id: UserId::from("1"),
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
            role: UserRole::Admin,
            permissions: ["all".to_string()].into_iter().collect(),
            last_login: Some(now),
            created_at: created,
            updated_at: created,
        },
        User {
            id: UserId::from("2"),
            email: "manager@example.com".to_string(),
            name: "Manager User".to_string(),
            role: UserRole::Manager,
            permissions: ["read".to_string(), "write".to_string()]
                .into_iter()
                .collect(),
            last_login: Some(now),
            created_at: created,
            updated_at: created,
        },
    ]
}

struct ItemSeed {
    id: &'static str,
    category: InventoryCategory,
    date: Option<NaiveDate>,
    item: &'static str,
    quantity: f64,
    farmer: Option<&'static str>,
    client: Option<&'static str>,
    expiry_date: Option<NaiveDate>,
}

impl ItemSeed {
    fn build(self, now: DateTime<Utc>) -> InventoryItem {
        let status = if self.category == InventoryCategory::Critical {
            ItemStatus::Critical
        } else {
            ItemStatus::Normal
        };
        InventoryItem {
            id: InventoryItemId::from(self.id),
            category: self.category,
            date: self.date,
            item: self.item.to_string(),
            quantity: self.quantity,
            unit: Unit::Kg,
            farmer: self.farmer.map(str::to_string),
            client: self.client.map(str::to_string),
            expiry_date: self.expiry_date,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

fn cold_rooms(now: DateTime<Utc>) -> Vec<ColdRoom> {
    let meru_items = vec![
        ItemSeed {
            id: "1",
            category: InventoryCategory::Incoming,
            date: Some(ymd(2024, 2, 5)),
            item: "Potatoes",
            quantity: 1000.0,
            farmer: Some("John Mutua"),
            client: None,
            expiry_date: None,
        },
        ItemSeed {
            id: "2",
            category: InventoryCategory::Outgoing,
            date: Some(ymd(2024, 2, 5)),
            item: "Carrots",
            quantity: 500.0,
            farmer: None,
            client: Some("Fresh Mart"),
            expiry_date: None,
        },
        ItemSeed {
            id: "3",
            category: InventoryCategory::Critical,
            date: None,
            item: "Tomatoes",
            quantity: 200.0,
            farmer: None,
            client: None,
            expiry_date: Some(ymd(2024, 2, 10)),
        },
        ItemSeed {
            id: "4",
            category: InventoryCategory::PickupSchedule,
            date: Some(ymd(2024, 2, 6)),
            item: "Potatoes",
            quantity: 800.0,
            farmer: None,
            client: Some("Green Grocers"),
            expiry_date: None,
        },
    ];

    let nakuru_items = vec![
        ItemSeed {
            id: "5",
            category: InventoryCategory::Incoming,
            date: Some(ymd(2024, 2, 5)),
            item: "Cabbages",
            quantity: 2000.0,
            farmer: Some("Peter Kamau"),
            client: None,
            expiry_date: None,
        },
        ItemSeed {
            id: "6",
            category: InventoryCategory::Outgoing,
            date: Some(ymd(2024, 2, 5)),
            item: "Onions",
            quantity: 1000.0,
            farmer: None,
            client: Some("Super Market"),
            expiry_date: None,
        },
        ItemSeed {
            id: "7",
            category: InventoryCategory::Critical,
            date: None,
            item: "Cabbages",
            quantity: 300.0,
            farmer: None,
            client: None,
            expiry_date: Some(ymd(2024, 2, 8)),
        },
        ItemSeed {
            id: "8",
            category: InventoryCategory::PickupSchedule,
            date: Some(ymd(2024, 2, 7)),
            item: "Onions",
            quantity: 500.0,
            farmer: None,
            client: Some("Fresh Foods Ltd"),
            expiry_date: None,
        },
    ];

    vec![
        ColdRoom {
            id: ColdRoomId::from("1"),
            location: "Meru Coldroom".to_string(),
            total_capacity: 5000.0,
            used_capacity: 3200.0,
            unit: Unit::Kg,
            temperature: 4.0,
            humidity: Some(85.0),
            last_checked: now,
            status: ColdRoomStatus::Operational,
            maintenance_status: MaintenanceStatus::Completed,
            next_maintenance: Some(ymd(2024, 3, 1)),
            created_at: midnight(2024, 1, 1),
            updated_at: midnight(2024, 2, 5),
            inventory: meru_items.into_iter().map(|s| s.build(now)).collect(),
        },
        ColdRoom {
            id: ColdRoomId::from("2"),
            location: "Nakuru Coldroom".to_string(),
            total_capacity: 8000.0,
            used_capacity: 6500.0,
            unit: Unit::Kg,
            temperature: 3.5,
            humidity: Some(82.0),
            last_checked: now,
            status: ColdRoomStatus::NearCapacity,
            maintenance_status: MaintenanceStatus::Pending,
            next_maintenance: Some(ymd(2024, 2, 15)),
            created_at: midnight(2024, 1, 1),
            updated_at: midnight(2024, 2, 5),
            inventory: nakuru_items.into_iter().map(|s| s.build(now)).collect(),
        },
    ]
}

fn maintenance() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord {
            id: MaintenanceId::from("1"),
            cold_room_id: ColdRoomId::from("1"),
            status: MaintenanceStatus::Completed,
            scheduled_date: ymd(2024, 1, 15),
            completed_date: Some(ymd(2024, 1, 15)),
            description: "Regular maintenance check".to_string(),
            technician: Some("James Mwangi".to_string()),
            notes: Some("All systems working properly".to_string()),
            created_at: midnight(2024, 1, 1),
            updated_at: midnight(2024, 1, 15),
        },
        MaintenanceRecord {
            id: MaintenanceId::from("2"),
            cold_room_id: ColdRoomId::from("2"),
            status: MaintenanceStatus::Pending,
            scheduled_date: ymd(2024, 2, 15),
            completed_date: None,
            description: "Temperature system check".to_string(),
            technician: Some("David Kimani".to_string()),
            notes: None,
            created_at: midnight(2024, 2, 1),
            updated_at: midnight(2024, 2, 1),
        },
    ]
}

fn reports() -> Vec<Report> {
    let january = DateRange {
        start: midnight(2024, 1, 1),
        end: midnight(2024, 1, 31),
    };
    vec![
        Report {
            id: ReportId::from("1"),
            report_type: ReportType::Inventory,
            format: ReportFormat::Pdf,
            date_range: january,
            generated_by: "Admin User".to_string(),
            created_at: midnight(2024, 2, 1),
            download_url: Some("#".to_string()),
        },
        Report {
            id: ReportId::from("2"),
            report_type: ReportType::Maintenance,
            format: ReportFormat::Excel,
            date_range: january,
            generated_by: "Manager User".to_string(),
            created_at: midnight(2024, 2, 1),
            download_url: Some("#".to_string()),
        },
    ]
}
