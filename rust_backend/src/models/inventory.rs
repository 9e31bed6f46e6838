//! Inventory items held in a cold room.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::cold_room::Unit;

crate::define_id_type!(
    /// Identifier of an inventory item.
    InventoryItemId
);

crate::define_label_enum!(
    /// Which inventory view an item belongs to.
    InventoryCategory {
        /// Produce received from a farmer.
        Incoming => "incoming",
        /// Produce dispatched to a client.
        Outgoing => "outgoing",
        /// Stock close to its expiry date.
        Critical => "critical",
        /// Planned future pickup by a client.
        PickupSchedule => "pickupSchedule",
    }
);

crate::define_label_enum!(
    ItemStatus {
        Normal => "normal",
        Critical => "critical",
        Expiring => "expiring",
    }
);

impl InventoryCategory {
    /// Column heading for the counterparty of items in this category.
    pub fn counterparty_label(&self) -> &'static str {
        match self {
            InventoryCategory::Incoming => "Farmer",
            _ => "Client",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub category: InventoryCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub item: String,
    pub quantity: f64,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// The farmer for incoming stock, otherwise the client.
    pub fn counterparty(&self) -> Option<&str> {
        self.farmer.as_deref().or(self.client.as_deref())
    }

    /// Quantity with its unit, e.g. `1000kg`.
    pub fn quantity_label(&self) -> String {
        format!("{}{}", self.quantity, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_match_wire_names() {
        assert_eq!(InventoryCategory::PickupSchedule.as_str(), "pickupSchedule");
        assert_eq!(
            "pickupSchedule".parse::<InventoryCategory>().unwrap(),
            InventoryCategory::PickupSchedule
        );
        assert_eq!(InventoryCategory::ALL.len(), 4);
    }

    #[test]
    fn test_counterparty_label() {
        assert_eq!(InventoryCategory::Incoming.counterparty_label(), "Farmer");
        assert_eq!(InventoryCategory::Outgoing.counterparty_label(), "Client");
        assert_eq!(InventoryCategory::PickupSchedule.counterparty_label(), "Client");
    }

    #[test]
    fn test_item_deserializes_with_explicit_category() {
        let json = r#"{
            "id": "9",
            "category": "incoming",
            "date": "2024-02-05",
            "item": "Potatoes",
            "quantity": 1000,
            "unit": "kg",
            "farmer": "John Mutua",
            "status": "normal",
            "createdAt": "2024-02-05T00:00:00Z",
            "updatedAt": "2024-02-05T00:00:00Z"
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, InventoryCategory::Incoming);
        assert_eq!(item.counterparty(), Some("John Mutua"));
        assert_eq!(item.quantity_label(), "1000kg");
        assert!(item.expiry_date.is_none());
    }
}
