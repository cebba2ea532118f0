//! Canonical recipe catalog.
//!
//! One fixed, immutable recipe per drink type. Lookup is total: every
//! [`DrinkType`] has exactly one canonical recipe and the table never changes
//! at runtime. Personalization works on a clone; nothing here is mutated.

use crate::models::drink::DrinkType;
use crate::models::recipe::{Ingredient, IngredientCategory, Recipe, RecipeStep};

use IngredientCategory::{CoffeeBean, DrinkBase, OptionalAddition, Syrup};

/// Canonical recipe for a drink. Total function; the returned value is a
/// fresh copy the caller owns.
pub fn canonical_recipe(drink: DrinkType) -> Recipe {
    match drink {
        DrinkType::Espresso => Recipe {
            drink,
            volume_ml: 30,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Water", "30ml", true, OptionalAddition),
                Ingredient::new("Cane sugar", "To taste", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Grind Arabica coffee beans to a fine consistency"),
                RecipeStep::new(2, "Tamp the coffee grounds evenly in the portafilter"),
                RecipeStep::new(3, "Extract 30ml of espresso in approximately 25-30 seconds"),
                RecipeStep::new(4, "If desired, add cane sugar to taste"),
            ],
            description: "A concentrated coffee served in a small, strong shot. The foundation \
                          of many coffee drinks with a rich crema on top."
                .to_string(),
        },
        DrinkType::Americano => Recipe {
            drink,
            volume_ml: 150,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Water", "120ml", true, OptionalAddition),
                Ingredient::new("Cane sugar", "To taste", false, OptionalAddition),
                Ingredient::new("Cream", "To taste", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Prepare a shot of espresso using Arabica coffee"),
                RecipeStep::new(2, "Heat 120ml of water to approximately 85°C"),
                RecipeStep::new(3, "Pour the hot water into a cup"),
                RecipeStep::new(4, "Add the espresso to the hot water"),
                RecipeStep::new(5, "Add optional cane sugar or cream if desired"),
            ],
            description: "An espresso diluted with hot water, making it similar in strength to \
                          regular drip coffee but with a different flavor profile."
                .to_string(),
        },
        DrinkType::Cappuccino => Recipe {
            drink,
            volume_ml: 150,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Milk", "60ml", true, OptionalAddition),
                Ingredient::new("Lactose-free milk", "60ml", false, OptionalAddition),
                Ingredient::new("Cinnamon", "A sprinkle", false, OptionalAddition),
                Ingredient::new("Chocolate", "A drizzle", false, Syrup),
                Ingredient::new("Caramel", "A drizzle", false, Syrup),
            ],
            steps: vec![
                RecipeStep::new(1, "Prepare a shot of espresso using Arabica coffee"),
                RecipeStep::new(2, "Steam and froth milk to create microfoam"),
                RecipeStep::new(3, "Pour the steamed milk over the espresso"),
                RecipeStep::new(4, "Top with a generous layer of milk foam"),
                RecipeStep::new(
                    5,
                    "Optional: Sprinkle with cinnamon or drizzle with chocolate or caramel syrup",
                ),
            ],
            description: "A classic Italian coffee with equal parts espresso, steamed milk, and \
                          milk foam, creating a perfect balance of flavors."
                .to_string(),
        },
        DrinkType::Latte => Recipe {
            drink,
            volume_ml: 240,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Milk", "180ml", true, OptionalAddition),
                Ingredient::new("Lactose-free milk", "180ml", false, OptionalAddition),
                Ingredient::new("Caramel", "15ml", false, Syrup),
                Ingredient::new("Chocolate", "15ml", false, Syrup),
                Ingredient::new("Hazelnut", "15ml", false, Syrup),
                Ingredient::new("Cinnamon", "A sprinkle", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Prepare a shot of espresso using Arabica coffee"),
                RecipeStep::new(2, "Steam milk until smooth and velvety"),
                RecipeStep::new(3, "Pour the steamed milk over the espresso, holding back the foam"),
                RecipeStep::new(4, "Add a thin layer of milk foam on top"),
                RecipeStep::new(5, "Optional: Add flavoring syrup or sprinkle with cinnamon"),
            ],
            description: "A creamy coffee drink with espresso and steamed milk, topped with a \
                          small layer of milk foam. Can be customized with various flavored \
                          syrups."
                .to_string(),
        },
        DrinkType::FlatWhite => Recipe {
            drink,
            volume_ml: 160,
            caffeine_mg: 130,
            ingredients: vec![
                Ingredient::new("Arabica", "14g", true, CoffeeBean),
                Ingredient::new("Milk", "100ml", true, OptionalAddition),
                Ingredient::new("Lactose-free milk", "100ml", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Prepare a double shot of espresso using Arabica coffee"),
                RecipeStep::new(2, "Steam milk to create microfoam with a silky texture"),
                RecipeStep::new(3, "Pour the steamed milk over the espresso with minimal foam"),
                RecipeStep::new(
                    4,
                    "The result should have a velvety texture with a higher coffee-to-milk ratio \
                     than a latte",
                ),
            ],
            description: "An Australian/New Zealand coffee drink similar to a latte but with \
                          less milk and a higher coffee-to-milk ratio. Served with a thin layer \
                          of microfoam."
                .to_string(),
        },
        DrinkType::Mocha => Recipe {
            drink,
            volume_ml: 280,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Milk", "180ml", true, OptionalAddition),
                Ingredient::new("Lactose-free milk", "180ml", false, OptionalAddition),
                Ingredient::new("Chocolate", "30ml", true, Syrup),
                Ingredient::new("Cream", "A dollop", false, OptionalAddition),
                Ingredient::new("Chocolate chips", "A sprinkle", false, OptionalAddition),
                Ingredient::new("Caramel", "A drizzle", false, Syrup),
            ],
            steps: vec![
                RecipeStep::new(1, "Prepare a shot of espresso using Arabica coffee"),
                RecipeStep::new(2, "Mix chocolate syrup with the hot espresso"),
                RecipeStep::new(3, "Steam milk until smooth and velvety"),
                RecipeStep::new(4, "Pour the steamed milk over the chocolate-espresso mixture"),
                RecipeStep::new(
                    5,
                    "Optional: Top with cream, chocolate chips, or a caramel drizzle",
                ),
            ],
            description: "A delicious combination of espresso, steamed milk, and chocolate, \
                          sometimes topped with whipped cream and additional chocolate for a \
                          dessert-like coffee experience."
                .to_string(),
        },
        DrinkType::Macchiato => Recipe {
            drink,
            volume_ml: 40,
            caffeine_mg: 63,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Milk", "10ml", true, OptionalAddition),
                Ingredient::new("Caramel", "5ml", false, Syrup),
            ],
            steps: vec![
                RecipeStep::new(1, "Prepare a shot of espresso using Arabica coffee"),
                RecipeStep::new(2, "Steam a small amount of milk to create microfoam"),
                RecipeStep::new(3, "Spoon a dollop of milk foam on top of the espresso"),
                RecipeStep::new(4, "Optional: Add a small amount of caramel syrup"),
            ],
            description: "An espresso 'stained' or 'marked' with a small amount of milk foam, \
                          resulting in a stronger coffee flavor with just a hint of milk."
                .to_string(),
        },
        DrinkType::Ristretto => Recipe {
            drink,
            volume_ml: 20,
            caffeine_mg: 60,
            ingredients: vec![
                Ingredient::new("Arabica", "7g", true, CoffeeBean),
                Ingredient::new("Water", "20ml", true, OptionalAddition),
                Ingredient::new("Cane sugar", "To taste", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Grind Arabica coffee beans to a fine consistency"),
                RecipeStep::new(2, "Tamp the coffee grounds evenly in the portafilter"),
                RecipeStep::new(3, "Extract only 20ml of espresso in approximately 15-20 seconds"),
                RecipeStep::new(4, "Optional: Add cane sugar to taste"),
            ],
            description: "A 'restricted' shot of espresso using the same amount of coffee but \
                          less water, resulting in a more concentrated, rich flavor profile."
                .to_string(),
        },
        DrinkType::Doppio => Recipe {
            drink,
            volume_ml: 60,
            caffeine_mg: 126,
            ingredients: vec![
                Ingredient::new("Arabica", "14g", true, CoffeeBean),
                Ingredient::new("Water", "60ml", true, OptionalAddition),
                Ingredient::new("Cane sugar", "To taste", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Grind Arabica coffee beans to a fine consistency"),
                RecipeStep::new(2, "Use a double portafilter basket with 14g of ground coffee"),
                RecipeStep::new(3, "Tamp the coffee grounds evenly"),
                RecipeStep::new(4, "Extract 60ml of espresso in approximately 25-30 seconds"),
                RecipeStep::new(5, "Optional: Add cane sugar to taste"),
            ],
            description: "A double shot of espresso, twice the amount of a single shot, \
                          providing a stronger coffee experience with more caffeine."
                .to_string(),
        },
        DrinkType::Matcha => Recipe {
            drink,
            volume_ml: 240,
            caffeine_mg: 70,
            ingredients: vec![
                Ingredient::new("Matcha", "2g", true, DrinkBase),
                Ingredient::new("Water", "60ml", true, OptionalAddition),
                Ingredient::new("Milk", "180ml", true, OptionalAddition),
                Ingredient::new("Lactose-free milk", "180ml", false, OptionalAddition),
                Ingredient::new("Cane sugar", "To taste", false, OptionalAddition),
                Ingredient::new("Vanilla", "A few drops", false, OptionalAddition),
            ],
            steps: vec![
                RecipeStep::new(1, "Heat water to 80°C, not boiling"),
                RecipeStep::new(2, "Add matcha powder to a cup or bowl"),
                RecipeStep::new(3, "Pour the hot water over the matcha and whisk until smooth"),
                RecipeStep::new(4, "Steam milk until smooth and velvety"),
                RecipeStep::new(5, "Pour the steamed milk over the matcha mixture"),
                RecipeStep::new(
                    6,
                    "Optional: Add cane sugar or a few drops of vanilla if desired",
                ),
            ],
            description: "A Japanese green tea latte made with finely ground matcha powder, hot \
                          water, and steamed milk, offering a unique earthy flavor with \
                          caffeine."
                .to_string(),
        },
    }
}
