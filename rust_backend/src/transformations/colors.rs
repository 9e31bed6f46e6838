//! Status → badge colour mappings.

use serde::Serialize;

use crate::models::{ColdRoomStatus, MaintenanceStatus};

/// Badge colour. Each colour renders as a light background with dark text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

impl StatusColor {
    pub fn name(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Yellow => "yellow",
            StatusColor::Red => "red",
            StatusColor::Blue => "blue",
            StatusColor::Gray => "gray",
        }
    }

    /// Background and text class pair, e.g. `bg-green-100 text-green-800`.
    pub fn classes(&self) -> String {
        format!("bg-{0}-100 text-{0}-800", self.name())
    }
}

/// Colour of a cold-room status label.
///
/// Only the three statuses with a dedicated badge are coloured; `Critical`
/// and unrecognised labels fall back to gray.
pub fn status_color_class(status: &str) -> StatusColor {
    match status.parse::<ColdRoomStatus>() {
        Ok(status) => cold_room_status_color(status),
        Err(_) => StatusColor::Gray,
    }
}

pub fn cold_room_status_color(status: ColdRoomStatus) -> StatusColor {
    match status {
        ColdRoomStatus::Operational => StatusColor::Green,
        ColdRoomStatus::NearCapacity => StatusColor::Yellow,
        ColdRoomStatus::Maintenance => StatusColor::Red,
        ColdRoomStatus::Critical => StatusColor::Gray,
    }
}

pub fn maintenance_status_color(status: MaintenanceStatus) -> StatusColor {
    match status {
        MaintenanceStatus::Completed => StatusColor::Green,
        MaintenanceStatus::Pending => StatusColor::Yellow,
        MaintenanceStatus::Scheduled => StatusColor::Blue,
        MaintenanceStatus::Overdue => StatusColor::Red,
    }
}

/// Colour of a maintenance status label; unknown labels are gray.
pub fn maintenance_status_color_class(status: &str) -> StatusColor {
    status
        .parse::<MaintenanceStatus>()
        .map(maintenance_status_color)
        .unwrap_or(StatusColor::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_room_status_colors() {
        assert_eq!(status_color_class("Operational"), StatusColor::Green);
        assert_eq!(status_color_class("Near Capacity"), StatusColor::Yellow);
        assert_eq!(status_color_class("Maintenance"), StatusColor::Red);
    }

    #[test]
    fn test_unknown_and_critical_fall_back_to_gray() {
        assert_eq!(status_color_class("Defrosting"), StatusColor::Gray);
        assert_eq!(status_color_class(""), StatusColor::Gray);
        assert_eq!(status_color_class("Critical"), StatusColor::Gray);
    }

    #[test]
    fn test_class_pairs() {
        assert_eq!(
            status_color_class("Operational").classes(),
            "bg-green-100 text-green-800"
        );
        assert_eq!(StatusColor::Gray.classes(), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_maintenance_colors() {
        assert_eq!(maintenance_status_color_class("completed"), StatusColor::Green);
        assert_eq!(maintenance_status_color_class("pending"), StatusColor::Yellow);
        assert_eq!(maintenance_status_color_class("scheduled"), StatusColor::Blue);
        assert_eq!(maintenance_status_color_class("overdue"), StatusColor::Red);
        assert_eq!(maintenance_status_color_class("cancelled"), StatusColor::Gray);
    }
}
