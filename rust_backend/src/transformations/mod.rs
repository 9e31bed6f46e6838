//! Pure derivations over the stored records.
//!
//! Nothing here touches the store; every function takes the records it
//! needs and returns display-ready values.
//!
//! # Modules
//!
//! - [`capacity`]: Capacity usage percentage
//! - [`colors`]: Status badge colours
//! - [`filtering`]: Status, room and category selections
//! - [`dashboard`]: Room cards, room details, critical stock and maintenance counts
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use coldroom_rust::db::fixtures;
//! use coldroom_rust::models::TemperatureUnit;
//! use coldroom_rust::transformations::room_cards;
//!
//! let data = fixtures::seed(Utc::now());
//! let cards = room_cards(&data.cold_rooms, TemperatureUnit::Celsius);
//! assert_eq!(cards[0].capacity_percentage, "64.0");
//! ```

pub mod capacity;
pub mod colors;
pub mod dashboard;
pub mod filtering;

pub use capacity::{capacity_percentage, capacity_ratio};
pub use colors::{
    cold_room_status_color, maintenance_status_color, maintenance_status_color_class,
    status_color_class, StatusColor,
};
pub use dashboard::{
    all_critical_items, critical_items, days_left, maintenance_alert, maintenance_overview,
    room_card, room_cards, room_detail, CriticalItemView, InventoryRow, MaintenanceAlert,
    MaintenanceOverview, RoomCard, RoomDetail,
};
pub use filtering::{
    filter_maintenance, inventory_items, maintenance_for_room, rooms_with_status, Selection,
    ALL_SENTINEL,
};
