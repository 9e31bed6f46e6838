//! Domain models for the cold-room tracker.
//!
//! - [`cold_room`]: Cold rooms, their status enums and the partial-update patch
//! - [`inventory`]: Inventory items tagged with their category
//! - [`maintenance`]: Maintenance records and the creation payload
//! - [`user`]: Users, roles and the local profile patch
//! - [`report`]: Generated report descriptors
//! - [`settings`]: Per-session notification and display preferences

pub mod cold_room;
pub mod inventory;
pub mod macros;
pub mod maintenance;
pub mod report;
pub mod settings;
pub mod user;

pub use cold_room::{ColdRoom, ColdRoomId, ColdRoomPatch, ColdRoomStatus, Unit};
pub use inventory::{InventoryCategory, InventoryItem, InventoryItemId, ItemStatus};
pub use maintenance::{MaintenanceId, MaintenanceRecord, MaintenanceStatus, NewMaintenanceRecord};
pub use report::{DateRange, Report, ReportFormat, ReportId, ReportType};
pub use settings::{
    Language, NotificationSettings, PreferenceSettings, TemperatureUnit, Theme, Timezone,
    UserSettings,
};
pub use user::{User, UserId, UserPatch, UserRole};
