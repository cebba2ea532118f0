//! End-to-end flow over a real state file: persist snapshots, load them
//! back, personalize recipes, and record consumption in the ledger.

mod fixtures;

use brewmate::models::drink::DrinkType;
use brewmate::services::ledger::ConsumptionLedger;
use brewmate::services::personalization::personalize;
use brewmate::storage::{self, JsonFileStore};
use chrono::NaiveDate;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_store_to_engine_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    // Persist user state.
    let store = JsonFileStore::open(&path).unwrap();
    storage::save_inventory(&store, &fixtures::stocked_inventory()).unwrap();
    storage::save_preferences(&store, &fixtures::sweet_tooth_preferences()).unwrap();
    drop(store);

    // Reload through a fresh store handle, as a new process would.
    let store = JsonFileStore::open(&path).unwrap();
    let inventory = storage::load_inventory(&store);
    let preferences = storage::load_preferences(&store);
    assert_eq!(inventory, fixtures::stocked_inventory());
    assert_eq!(preferences, fixtures::sweet_tooth_preferences());

    // A stocked kitchen with syrups liked makes the mocha preparable.
    let mocha = personalize(DrinkType::Mocha, &inventory, &preferences);
    assert!(mocha.is_available());
    assert!(mocha.description.contains("fruity notes"));
    assert!(mocha.description.contains("Ready to prepare"));

    // Matcha needs the drink base, which is selected in the fixture.
    let matcha = personalize(DrinkType::Matcha, &inventory, &preferences);
    assert!(matcha.is_available());
}

#[test]
fn test_engine_to_ledger_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let monday = day("2025-06-02");
    let tuesday = day("2025-06-03");

    let store = JsonFileStore::open(&path).unwrap();
    storage::save_inventory(&store, &fixtures::stocked_inventory()).unwrap();
    storage::save_preferences(&store, &fixtures::sweet_tooth_preferences()).unwrap();

    let inventory = storage::load_inventory(&store);
    let preferences = storage::load_preferences(&store);

    let doppio = personalize(DrinkType::Doppio, &inventory, &preferences);
    let flat_white = personalize(DrinkType::FlatWhite, &inventory, &preferences);

    let mut ledger = ConsumptionLedger::open(&store, monday).unwrap();
    ledger.record(&doppio, monday).unwrap();
    ledger.record(&flat_white, monday).unwrap();
    assert_eq!(ledger.caffeine_today_mg(), 126 + 130);
    drop(ledger);
    drop(store);

    // Next day, new process: total rolls over, history survives.
    let store = JsonFileStore::open(&path).unwrap();
    let ledger = ConsumptionLedger::open(&store, tuesday).unwrap();
    assert_eq!(ledger.caffeine_today_mg(), 0);

    let history: Vec<DrinkType> = ledger.latest(10).iter().map(|r| r.drink).collect();
    assert_eq!(history, vec![DrinkType::FlatWhite, DrinkType::Doppio]);
}

#[test]
fn test_unpersisted_state_uses_starter_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();

    let inventory = storage::load_inventory(&store);
    let preferences = storage::load_preferences(&store);

    // Starter inventory has Arabica and Milk selected, so a cappuccino works
    // out of the box (its syrups are suppressed by the default preferences).
    let cappuccino = personalize(DrinkType::Cappuccino, &inventory, &preferences);
    assert!(cappuccino.is_available());

    // Matcha powder is not in the starter selection.
    let matcha = personalize(DrinkType::Matcha, &inventory, &preferences);
    assert!(!matcha.is_available());
    assert_eq!(matcha.missing_ingredients()[0].name, "Matcha");
}
