//! Shared snapshot builders for integration tests.

use brewmate::models::inventory::{InventoryItem, InventorySnapshot};
use brewmate::models::preferences::PreferenceSnapshot;

fn items(entries: &[(&str, bool)]) -> Vec<InventoryItem> {
    entries
        .iter()
        .map(|(name, selected)| InventoryItem::new(name, *selected))
        .collect()
}

/// A well-stocked kitchen: one bean, milk in both variants, two syrups.
pub fn stocked_inventory() -> InventorySnapshot {
    InventorySnapshot {
        coffee_items: items(&[("Arabica", true), ("Robusta", false)]),
        drink_items: items(&[("Matcha", true), ("Cocoa", false)]),
        optional_items: items(&[
            ("Water", true),
            ("Milk", true),
            ("Lactose-free milk", true),
            ("Cane sugar", true),
            ("Cinnamon", false),
        ]),
        syrup_items: items(&[("Caramel", true), ("Chocolate", true), ("Hazelnut", false)]),
    }
}

/// Preferences of a syrup-loving user with a fruity taste.
pub fn sweet_tooth_preferences() -> PreferenceSnapshot {
    PreferenceSnapshot {
        likes_pure_coffee: false,
        likes_syrups: true,
        has_allergies: false,
        allergens: Vec::new(),
        flavor: Some("Fruity".to_string()),
    }
}
