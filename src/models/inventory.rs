use serde::{Deserialize, Serialize};

/// One shelf entry: something the user may or may not currently have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    pub is_selected: bool,
}

impl InventoryItem {
    pub fn new(name: &str, is_selected: bool) -> Self {
        Self {
            name: name.to_string(),
            is_selected,
        }
    }
}

/// Point-in-time copy of the user's inventory: four named sets, unique by
/// name within each set. Passed to the engine by reference; the engine never
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub coffee_items: Vec<InventoryItem>,
    pub drink_items: Vec<InventoryItem>,
    pub optional_items: Vec<InventoryItem>,
    pub syrup_items: Vec<InventoryItem>,
}

impl InventorySnapshot {
    /// The fixed starter inventory handed out when no state has been
    /// persisted yet.
    pub fn starter() -> Self {
        Self {
            coffee_items: vec![
                InventoryItem::new("Arabica", true),
                InventoryItem::new("Robusta", false),
                InventoryItem::new("Colombia", false),
                InventoryItem::new("Dicofinate", false),
            ],
            drink_items: vec![
                InventoryItem::new("Cocoa", true),
                InventoryItem::new("Hot chocolate", false),
                InventoryItem::new("Matcha", false),
            ],
            optional_items: vec![
                InventoryItem::new("Milk", true),
                InventoryItem::new("Lactose-free milk", false),
                InventoryItem::new("Cinnamon", false),
                InventoryItem::new("Cane sugar", false),
                InventoryItem::new("Cream", false),
                InventoryItem::new("Chocolate chips", false),
            ],
            syrup_items: vec![
                InventoryItem::new("Caramel", true),
                InventoryItem::new("Chocolate", false),
                InventoryItem::new("Cherry", false),
                InventoryItem::new("Hazelnut", false),
            ],
        }
    }
}

/// True when `items` holds a selected entry matching `name`
/// (ASCII-case-insensitive).
pub fn has_selected(items: &[InventoryItem], name: &str) -> bool {
    items
        .iter()
        .any(|item| item.is_selected && item.name.eq_ignore_ascii_case(name))
}
