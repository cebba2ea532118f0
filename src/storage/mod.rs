//! Persisted-state access.
//!
//! The engine itself never touches storage; callers load point-in-time
//! snapshots through the narrow [`KeyValueStore`] interface and pass them in
//! by value. A missing or corrupt record is never an engine-visible failure:
//! loads fall back to the documented defaults and log a warning.

pub mod json_store;

pub use json_store::{JsonFileStore, MemoryStore};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::models::inventory::InventorySnapshot;
use crate::models::preferences::PreferenceSnapshot;

/// Fixed storage keys. Renaming any of these invalidates persisted state.
pub mod keys {
    pub const INVENTORY: &str = "inventoryItems";
    pub const LIKES_PURE_COFFEE: &str = "userLikesPureCoffee";
    pub const LIKES_SYRUPS: &str = "userLikesSyrups";
    pub const HAS_ALLERGIES: &str = "userHasAllergies";
    pub const ALLERGENS: &str = "userAllergens";
    pub const FLAVOR: &str = "userCoffeeFlavor";
    pub const CONSUMED_DRINKS: &str = "consumedDrinks";
    pub const TODAY_CAFFEINE_MG: &str = "todayCaffeineMg";
    pub const LAST_SAVED_DATE: &str = "lastSavedDate";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Narrow key-value interface the rest of the crate reads and writes
/// through. Values are JSON text; the physical encoding stays behind the
/// implementation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a value; a read failure or corrupt payload logs a warning
/// and yields `None` so callers substitute their default.
pub(crate) fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt value in store, falling back to default");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "store read failed, falling back to default");
            None
        }
    }
}

pub(crate) fn set_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Load the inventory snapshot, or the fixed starter inventory when nothing
/// usable has been persisted.
pub fn load_inventory(store: &dyn KeyValueStore) -> InventorySnapshot {
    get_json(store, keys::INVENTORY).unwrap_or_else(InventorySnapshot::starter)
}

pub fn save_inventory(
    store: &dyn KeyValueStore,
    snapshot: &InventorySnapshot,
) -> Result<(), StorageError> {
    set_json(store, keys::INVENTORY, snapshot)
}

/// Load the preference snapshot. Each field is keyed separately and defaults
/// individually (false / empty / no flavor).
pub fn load_preferences(store: &dyn KeyValueStore) -> PreferenceSnapshot {
    PreferenceSnapshot {
        likes_pure_coffee: get_json(store, keys::LIKES_PURE_COFFEE).unwrap_or(false),
        likes_syrups: get_json(store, keys::LIKES_SYRUPS).unwrap_or(false),
        has_allergies: get_json(store, keys::HAS_ALLERGIES).unwrap_or(false),
        allergens: get_json(store, keys::ALLERGENS).unwrap_or_default(),
        flavor: get_json::<Option<String>>(store, keys::FLAVOR).flatten(),
    }
}

pub fn save_preferences(
    store: &dyn KeyValueStore,
    snapshot: &PreferenceSnapshot,
) -> Result<(), StorageError> {
    set_json(store, keys::LIKES_PURE_COFFEE, &snapshot.likes_pure_coffee)?;
    set_json(store, keys::LIKES_SYRUPS, &snapshot.likes_syrups)?;
    set_json(store, keys::HAS_ALLERGIES, &snapshot.has_allergies)?;
    set_json(store, keys::ALLERGENS, &snapshot.allergens)?;
    set_json(store, keys::FLAVOR, &snapshot.flavor)?;
    Ok(())
}
