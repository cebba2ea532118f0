//! Recipe personalization engine.
//!
//! Takes a canonical recipe plus point-in-time inventory and preference
//! snapshots and derives a customized recipe: which ingredients are actually
//! usable, which required ones are missing, and whether the drink can be
//! prepared. Pure and deterministic — reads its inputs, mutates nothing
//! shared, and always completes in O(ingredients).
//!
//! Rule order matters; later passes may override earlier availability:
//! 1. availability resolution by ingredient category (with bean substitution)
//! 2. allergy filtering (with the lactose-free milk promotion)
//! 3. syrup suppression for users who dislike syrups
//! 4. pure-coffee simplification
//! 5. description augmentation (flavor clause, then preparability clause)

use tracing::debug;

use crate::catalog;
use crate::models::drink::DrinkType;
use crate::models::inventory::{has_selected, InventorySnapshot};
use crate::models::preferences::{FlavorNote, PreferenceSnapshot};
use crate::models::recipe::{Ingredient, IngredientCategory, Recipe};

/// Appended when every required ingredient is on hand.
const READY_CLAUSE: &str = "\n\nReady to prepare: You have all the necessary ingredients!";

/// Prefix of the clause listing required-but-missing ingredients.
const UNAVAILABLE_PREFIX: &str =
    "\n\nUnavailable: This recipe requires ingredients that are not in your inventory: ";

/// Personalize the canonical recipe for `drink` against the given snapshots.
///
/// Total function: empty or default snapshots simply mean fewer rules apply.
/// Two calls with identical inputs produce value-equal, independent results.
pub fn personalize(
    drink: DrinkType,
    inventory: &InventorySnapshot,
    preferences: &PreferenceSnapshot,
) -> Recipe {
    let canonical = catalog::canonical_recipe(drink);
    let mut ingredients = canonical.ingredients.clone();

    // ── Availability by category ─────────────────────────────────────
    resolve_availability(&mut ingredients, inventory, preferences);

    // ── Allergy filtering ────────────────────────────────────────────
    if preferences.has_allergies {
        apply_allergy_filter(&mut ingredients, &preferences.allergens, inventory);
    }

    // ── Syrup suppression ────────────────────────────────────────────
    // Unconditional: overrides earlier results, including recipes that mark
    // a syrup required (mocha's chocolate).
    if !preferences.likes_syrups {
        for ingredient in ingredients
            .iter_mut()
            .filter(|i| i.category == IngredientCategory::Syrup)
        {
            ingredient.is_required = false;
            ingredient.is_available = false;
        }
    }

    // ── Pure-coffee simplification ───────────────────────────────────
    if preferences.likes_pure_coffee {
        for ingredient in ingredients.iter_mut().filter(|i| {
            matches!(
                i.category,
                IngredientCategory::OptionalAddition | IngredientCategory::Syrup
            )
        }) {
            ingredient.is_required = false;
        }
    }

    // ── Description augmentation ─────────────────────────────────────
    let description = augment_description(&canonical.description, &ingredients, preferences);

    let recipe = Recipe {
        drink,
        volume_ml: canonical.volume_ml,
        caffeine_mg: canonical.caffeine_mg,
        ingredients,
        steps: canonical.steps,
        description,
    };

    debug!(
        drink = %recipe.drink,
        can_prepare = recipe.is_available(),
        missing = recipe.missing_ingredients().len(),
        "personalized recipe"
    );

    recipe
}

/// Resolve each ingredient's availability from the matching inventory shelf.
///
/// A required coffee bean the user lacks is substituted with the first
/// selected bean in the inventory; with no bean selected at all it stays
/// unavailable under its original name. Syrups additionally require the
/// user to like syrups.
fn resolve_availability(
    ingredients: &mut [Ingredient],
    inventory: &InventorySnapshot,
    preferences: &PreferenceSnapshot,
) {
    for ingredient in ingredients.iter_mut() {
        match ingredient.category {
            IngredientCategory::CoffeeBean => {
                ingredient.is_available = has_selected(&inventory.coffee_items, &ingredient.name);

                if ingredient.is_required && !ingredient.is_available {
                    if let Some(bean) = inventory.coffee_items.iter().find(|i| i.is_selected) {
                        ingredient.name = bean.name.clone();
                        ingredient.is_available = true;
                    }
                }
            }
            IngredientCategory::DrinkBase => {
                ingredient.is_available = has_selected(&inventory.drink_items, &ingredient.name);
            }
            IngredientCategory::Syrup => {
                ingredient.is_available = has_selected(&inventory.syrup_items, &ingredient.name)
                    && preferences.likes_syrups;
            }
            IngredientCategory::OptionalAddition => {
                ingredient.is_available = has_selected(&inventory.optional_items, &ingredient.name);
            }
        }
    }
}

/// Force every allergen-matching ingredient unavailable, then promote the
/// lactose-free alternative when required milk was filtered out.
///
/// The promotion runs after the general pass so the promoted entry's
/// availability reflects the inventory, not the allergen filter ("Lactose-free
/// milk" itself contains the substring "milk").
fn apply_allergy_filter(
    ingredients: &mut [Ingredient],
    allergens: &[String],
    inventory: &InventorySnapshot,
) {
    let mut milk_filtered = false;

    for ingredient in ingredients.iter_mut() {
        let matches_allergen = allergens.iter().any(|allergen| {
            ingredient
                .name
                .to_lowercase()
                .contains(&allergen.to_lowercase())
        });
        if matches_allergen {
            ingredient.is_available = false;
            if ingredient.is_required && ingredient.name.eq_ignore_ascii_case("milk") {
                milk_filtered = true;
            }
        }
    }

    if milk_filtered {
        if let Some(substitute) = ingredients
            .iter_mut()
            .find(|i| i.name.eq_ignore_ascii_case("Lactose-free milk"))
        {
            substitute.is_required = true;
            substitute.is_available = has_selected(&inventory.optional_items, "Lactose-free milk");
        }
    }
}

/// Marker substring and canned sentence for a flavor note. The marker guards
/// against appending an equivalent clause twice.
fn flavor_clause(note: FlavorNote) -> (&'static str, &'static str) {
    match note {
        FlavorNote::Sour => (
            "with a sour finish",
            " Prepared with a special technique to enhance the natural acidity for a sour finish.",
        ),
        FlavorNote::Bitter => (
            "with a strong, bitter finish",
            " Brewed to enhance the robust, bitter notes that true coffee enthusiasts appreciate.",
        ),
        FlavorNote::Tart => (
            "with a tart profile",
            " Enhanced with a brewing technique that brings out the tart, wine-like profile.",
        ),
        FlavorNote::Fruity => (
            "fruity notes",
            " Carefully prepared to highlight the natural fruity notes of the coffee beans.",
        ),
    }
}

/// Append the flavor clause (if any) and the preparability clause to the
/// canonical description. Each clause is appended at most once, guarded by
/// substring containment.
fn augment_description(
    base: &str,
    ingredients: &[Ingredient],
    preferences: &PreferenceSnapshot,
) -> String {
    let mut description = base.to_string();

    if let Some(note) = preferences.flavor_note() {
        let (marker, clause) = flavor_clause(note);
        if !description.contains(marker) {
            description.push_str(clause);
        }
    }

    // Preparability is evaluated after all ingredient passes have run.
    let can_prepare = ingredients
        .iter()
        .filter(|i| i.is_required)
        .all(|i| i.is_available);

    if can_prepare {
        if !description.contains(READY_CLAUSE) {
            description.push_str(READY_CLAUSE);
        }
    } else if !description.contains(UNAVAILABLE_PREFIX) {
        let missing = ingredients
            .iter()
            .filter(|i| i.is_required && !i.is_available)
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        description.push_str(UNAVAILABLE_PREFIX);
        description.push_str(&missing);
        description.push('.');
    }

    description
}
