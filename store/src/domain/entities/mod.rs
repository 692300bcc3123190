//! Domain entities
//!
//! Plain value types for recipes, shopping lists, pantry stock and user
//! profiles. Updates replace a whole snapshot, so none of these expose
//! in-place mutators beyond consuming `with_*` helpers.

pub mod ids;
pub mod ingredient;
pub mod owned;
pub mod pantry;
pub mod recipe;
pub mod shopping_list;
pub mod user;

pub use ids::{EntityId, OwnerId, PantryIngredientId, RecipeId, ShoppingListId};
pub use ingredient::Ingredient;
pub use owned::OwnedEntity;
pub use pantry::{NewPantryIngredient, PantryIngredient};
pub use recipe::{NewRecipe, Recipe};
pub use shopping_list::{NewShoppingList, ShoppingList};
pub use user::{Subscription, User};
