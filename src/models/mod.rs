pub mod drink;
pub mod inventory;
pub mod preferences;
pub mod recipe;

pub use drink::DrinkType;
pub use inventory::{InventoryItem, InventorySnapshot};
pub use preferences::{FlavorNote, PreferenceSnapshot};
pub use recipe::{Ingredient, IngredientCategory, Recipe, RecipeStep};
