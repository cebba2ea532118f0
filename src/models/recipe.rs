use serde::{Deserialize, Serialize};
use strum::Display;

use crate::models::drink::DrinkType;

/// Which inventory shelf an ingredient is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum IngredientCategory {
    CoffeeBean,
    DrinkBase,
    OptionalAddition,
    Syrup,
}

/// One line of a recipe's ingredient list.
///
/// `name`, `amount`, and `category` are fixed by the canonical recipe;
/// `is_required` and `is_available` are toggled on a cloned copy during
/// personalization. Identity within a recipe is the name, compared
/// case-insensitively against inventory entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub is_required: bool,
    pub is_available: bool,
    pub category: IngredientCategory,
}

impl Ingredient {
    /// A canonical ingredient; availability always starts false.
    pub fn new(
        name: &str,
        amount: &str,
        is_required: bool,
        category: IngredientCategory,
    ) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            is_required,
            is_available: false,
            category,
        }
    }
}

/// An ordered preparation step. Order values are unique and ascending within
/// a recipe and are never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub order: u32,
    pub description: String,
}

impl RecipeStep {
    pub fn new(order: u32, description: &str) -> Self {
        Self {
            order,
            description: description.to_string(),
        }
    }
}

/// A drink recipe — canonical when it comes straight out of the catalog,
/// personalized when derived from one via the engine. A personalized recipe
/// is an independent value; the canonical one is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub drink: DrinkType,
    pub volume_ml: u32,
    pub caffeine_mg: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
    pub description: String,
}

impl Recipe {
    /// Human-readable drink name.
    pub fn name(&self) -> String {
        self.drink.to_string()
    }

    /// True when every required ingredient is available. Recomputed from the
    /// ingredient list on every call; never cached.
    pub fn is_available(&self) -> bool {
        self.ingredients
            .iter()
            .filter(|i| i.is_required)
            .all(|i| i.is_available)
    }

    /// Required-but-unavailable ingredients, in ingredient order.
    pub fn missing_ingredients(&self) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.is_required && !i.is_available)
            .collect()
    }

    /// Optional ingredients the user actually has, in ingredient order.
    pub fn available_optional_ingredients(&self) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| !i.is_required && i.is_available)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            drink: DrinkType::Espresso,
            volume_ml: 30,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, IngredientCategory::CoffeeBean),
                Ingredient::new("Water", "30ml", true, IngredientCategory::OptionalAddition),
                Ingredient::new("Cane sugar", "To taste", false, IngredientCategory::OptionalAddition),
            ],
            steps: vec![RecipeStep::new(1, "Pull the shot")],
            description: "A small strong shot.".to_string(),
        }
    }

    #[test]
    fn test_fresh_ingredients_unavailable() {
        let recipe = sample_recipe();
        assert!(recipe.ingredients.iter().all(|i| !i.is_available));
        assert!(!recipe.is_available());
    }

    #[test]
    fn test_views_recomputed_from_ingredients() {
        let mut recipe = sample_recipe();
        recipe.ingredients[0].is_available = true;
        recipe.ingredients[1].is_available = true;
        recipe.ingredients[2].is_available = true;

        assert!(recipe.is_available());
        assert!(recipe.missing_ingredients().is_empty());
        let optional: Vec<_> = recipe
            .available_optional_ingredients()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(optional, vec!["Cane sugar"]);

        recipe.ingredients[1].is_available = false;
        assert!(!recipe.is_available());
        assert_eq!(recipe.missing_ingredients()[0].name, "Water");
    }
}
