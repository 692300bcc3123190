//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::document::{
    PantryDocuments, RecipeDocuments, RetryPolicy, ShoppingListDocuments, UserDocuments,
};
use crate::adapters::memory::InMemoryDocumentStore;
use crate::domain::entities::{Ingredient, NewPantryIngredient, NewRecipe, OwnerId};
use crate::domain::ports::DocumentStore;

/// Retry policy with millisecond delays so tests stay fast
pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        timeout: Duration::from_millis(500),
    }
}

pub fn test_owner() -> OwnerId {
    OwnerId::from("user-alice")
}

pub fn other_owner() -> OwnerId {
    OwnerId::from("user-bob")
}

/// The "Soup" recipe used throughout the examples
pub fn soup_recipe() -> NewRecipe {
    NewRecipe::new("Soup")
        .with_description("Simple and salty")
        .with_ingredients(vec![Ingredient::named("Salt"), Ingredient::named("Water")])
        .with_instructions("Boil the water. Add salt.")
}

pub fn pancake_recipe() -> NewRecipe {
    NewRecipe::new("Pancakes").with_ingredients(vec![
        Ingredient::with_quantity("Flour", 200.0, Some("g")),
        Ingredient::with_quantity("Milk", 300.0, Some("ml")),
        Ingredient::with_quantity("Eggs", 2.0, None),
        Ingredient::named("Salt"),
    ])
}

pub fn omelette_recipe() -> NewRecipe {
    NewRecipe::new("Omelette").with_ingredients(vec![
        Ingredient::with_quantity("eggs", 3.0, None),
        Ingredient::with_quantity("Milk", 50.0, Some("ml")),
        Ingredient::named("salt"),
    ])
}

pub fn pantry_item(name: &str, quantity: f64, unit: Option<&str>) -> NewPantryIngredient {
    NewPantryIngredient::new(name, quantity, unit)
}

/// Document repositories sharing one store
pub struct TestRepos {
    pub recipes: Arc<RecipeDocuments>,
    pub shopping_lists: Arc<ShoppingListDocuments>,
    pub pantry: Arc<PantryDocuments>,
    pub users: Arc<UserDocuments>,
}

pub fn repos_over(store: Arc<dyn DocumentStore>) -> TestRepos {
    let policy = fast_retry_policy();
    TestRepos {
        recipes: Arc::new(RecipeDocuments::new(store.clone(), policy.clone())),
        shopping_lists: Arc::new(ShoppingListDocuments::new(store.clone(), policy.clone())),
        pantry: Arc::new(PantryDocuments::new(store.clone(), policy.clone())),
        users: Arc::new(UserDocuments::new(store, policy)),
    }
}

pub fn memory_repos() -> TestRepos {
    repos_over(Arc::new(InMemoryDocumentStore::new()))
}
