//! Consumption ledger.
//!
//! Records drinks consumed for the daily caffeine total and history display.
//! Interested parties register listeners on the ledger; they are invoked
//! synchronously after a drink is recorded, so there is no broadcast bus and
//! no delivery ordering to reason about.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::models::drink::DrinkType;
use crate::models::recipe::Recipe;
use crate::storage::{self, keys, KeyValueStore, StorageError};

/// Daily caffeine threshold above which consumption is flagged.
pub const DAILY_CAFFEINE_LIMIT_MG: u32 = 400;

/// One consumed drink, as persisted in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRecord {
    pub id: Uuid,
    pub drink: DrinkType,
    pub caffeine_mg: u32,
    pub consumed_on: NaiveDate,
}

/// Payload handed to listeners after a drink is recorded.
#[derive(Debug, Clone, Copy)]
pub struct ConsumptionEvent {
    pub drink: DrinkType,
    pub caffeine_mg: u32,
    pub total_today_mg: u32,
}

pub type ConsumptionListener = Box<dyn Fn(&ConsumptionEvent) + Send>;

/// Ledger over a key-value store. History is kept most recent first; the
/// caffeine total resets when a new day is observed, the history does not.
pub struct ConsumptionLedger<'a> {
    store: &'a dyn KeyValueStore,
    records: Vec<ConsumptionRecord>,
    today_caffeine_mg: u32,
    current_day: NaiveDate,
    listeners: Vec<ConsumptionListener>,
}

impl<'a> ConsumptionLedger<'a> {
    /// Load persisted ledger state, rolling the daily total over if the last
    /// recorded day differs from `today`. Corrupt or missing state loads as
    /// an empty ledger.
    pub fn open(store: &'a dyn KeyValueStore, today: NaiveDate) -> Result<Self, StorageError> {
        let records: Vec<ConsumptionRecord> =
            storage::get_json(store, keys::CONSUMED_DRINKS).unwrap_or_default();
        let mut today_caffeine_mg: u32 =
            storage::get_json(store, keys::TODAY_CAFFEINE_MG).unwrap_or(0);

        let last_saved: Option<NaiveDate> = storage::get_json(store, keys::LAST_SAVED_DATE);
        if let Some(last) = last_saved {
            if last != today {
                info!(%last, %today, "new day, resetting caffeine total");
                today_caffeine_mg = 0;
                storage::set_json(store, keys::TODAY_CAFFEINE_MG, &today_caffeine_mg)?;
            }
        }
        storage::set_json(store, keys::LAST_SAVED_DATE, &today)?;

        Ok(Self {
            store,
            records,
            today_caffeine_mg,
            current_day: today,
            listeners: Vec::new(),
        })
    }

    /// Register a callback invoked synchronously after every recorded drink.
    pub fn on_drink_consumed(&mut self, listener: impl Fn(&ConsumptionEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Record a consumed drink: prepend it to the history, add its caffeine
    /// to the daily total, persist, then notify listeners.
    pub fn record(&mut self, recipe: &Recipe, today: NaiveDate) -> Result<(), StorageError> {
        if today != self.current_day {
            self.today_caffeine_mg = 0;
            self.current_day = today;
        }

        let record = ConsumptionRecord {
            id: Uuid::new_v4(),
            drink: recipe.drink,
            caffeine_mg: recipe.caffeine_mg,
            consumed_on: today,
        };
        self.records.insert(0, record);
        self.today_caffeine_mg += recipe.caffeine_mg;

        storage::set_json(self.store, keys::CONSUMED_DRINKS, &self.records)?;
        storage::set_json(self.store, keys::TODAY_CAFFEINE_MG, &self.today_caffeine_mg)?;
        storage::set_json(self.store, keys::LAST_SAVED_DATE, &today)?;

        info!(
            drink = %recipe.drink,
            caffeine_mg = recipe.caffeine_mg,
            total_today_mg = self.today_caffeine_mg,
            "drink consumed"
        );

        let event = ConsumptionEvent {
            drink: recipe.drink,
            caffeine_mg: recipe.caffeine_mg,
            total_today_mg: self.today_caffeine_mg,
        };
        for listener in &self.listeners {
            listener(&event);
        }

        Ok(())
    }

    pub fn caffeine_today_mg(&self) -> u32 {
        self.today_caffeine_mg
    }

    pub fn is_limit_exceeded(&self) -> bool {
        self.today_caffeine_mg > DAILY_CAFFEINE_LIMIT_MG
    }

    /// The `n` most recently consumed drinks, newest first.
    pub fn latest(&self, n: usize) -> &[ConsumptionRecord] {
        &self.records[..n.min(self.records.len())]
    }
}
