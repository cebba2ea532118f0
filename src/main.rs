use std::str::FromStr;

use chrono::Local;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use brewmate::config::AppConfig;
use brewmate::models::drink::DrinkType;
use brewmate::models::recipe::Recipe;
use brewmate::services::ledger::{ConsumptionLedger, DAILY_CAFFEINE_LIMIT_MG};
use brewmate::services::personalization;
use brewmate::storage::{self, JsonFileStore};

fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    let store =
        JsonFileStore::open(&config.store_path).expect("Failed to open state file");
    let inventory = storage::load_inventory(&store);
    let preferences = storage::load_preferences(&store);

    let mut args = std::env::args().skip(1).peekable();
    let drink_arg = args.next();
    let consume = args.peek().map(String::as_str) == Some("--consume");

    let Some(drink_arg) = drink_arg else {
        // No drink named: summarize availability across the catalog.
        for drink in DrinkType::iter() {
            let recipe = personalization::personalize(drink, &inventory, &preferences);
            let status = if recipe.is_available() {
                "ready".to_string()
            } else {
                let missing: Vec<&str> = recipe
                    .missing_ingredients()
                    .iter()
                    .map(|i| i.name.as_str())
                    .collect();
                format!("missing: {}", missing.join(", "))
            };
            println!(
                "{:<12} {:>4} ml  {:>3} mg   {status}",
                recipe.name(),
                recipe.volume_ml,
                recipe.caffeine_mg
            );
        }
        return;
    };

    let drink = DrinkType::from_str(&drink_arg)
        .unwrap_or_else(|_| panic!("Unknown drink '{drink_arg}'"));

    let recipe = personalization::personalize(drink, &inventory, &preferences);
    print_recipe(&recipe);

    if consume {
        let today = Local::now().date_naive();
        let mut ledger =
            ConsumptionLedger::open(&store, today).expect("Failed to open consumption ledger");
        ledger.record(&recipe, today).expect("Failed to record drink");

        println!("\nCaffeine today: {} mg", ledger.caffeine_today_mg());
        if ledger.is_limit_exceeded() {
            println!("Warning: over the {DAILY_CAFFEINE_LIMIT_MG} mg daily limit");
        }
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("{} — {} ml, {} mg caffeine\n", recipe.name(), recipe.volume_ml, recipe.caffeine_mg);

    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        let mark = if ingredient.is_available { "x" } else { " " };
        let required = if ingredient.is_required { "" } else { " (optional)" };
        println!("  [{mark}] {} — {}{required}", ingredient.name, ingredient.amount);
    }

    println!("\nPreparation:");
    for step in &recipe.steps {
        println!("  {}. {}", step.order, step.description);
    }

    println!("\n{}", recipe.description);
}
