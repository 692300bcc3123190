//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (see `adapters::document`).
//!
//! Every call takes the authenticated owner. "Not there" is a normal
//! outcome reported as `false` / `None`; `Err` is reserved for failures the
//! caller cannot fix by changing the arguments (storage outages, permission
//! problems, invalid input).

use async_trait::async_trait;

use crate::domain::entities::{
    NewPantryIngredient, NewRecipe, NewShoppingList, OwnerId, PantryIngredient,
    PantryIngredientId, Recipe, RecipeId, ShoppingList, ShoppingListId, User,
};
use crate::error::DomainError;

/// Repository for Recipe entities
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes of the owner
    async fn list(&self, owner: &OwnerId) -> Result<Vec<Recipe>, DomainError>;

    /// Find a recipe by ID
    async fn get(&self, owner: &OwnerId, id: &RecipeId) -> Result<Option<Recipe>, DomainError>;

    /// Create a recipe. `None` if the requested id is already taken.
    async fn add(&self, owner: &OwnerId, recipe: &NewRecipe)
        -> Result<Option<Recipe>, DomainError>;

    /// Replace a stored recipe. `false` if it does not exist.
    async fn update(&self, owner: &OwnerId, recipe: &Recipe) -> Result<bool, DomainError>;

    /// Remove a recipe. `false` if it does not exist.
    ///
    /// A retried delete whose earlier attempt already landed also reports
    /// `false`; the recipe is gone in both cases.
    async fn delete(&self, owner: &OwnerId, id: &RecipeId) -> Result<bool, DomainError>;
}

/// Repository for ShoppingList entities
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<ShoppingList>, DomainError>;

    async fn get(
        &self,
        owner: &OwnerId,
        id: &ShoppingListId,
    ) -> Result<Option<ShoppingList>, DomainError>;

    async fn add(
        &self,
        owner: &OwnerId,
        list: &NewShoppingList,
    ) -> Result<Option<ShoppingList>, DomainError>;

    async fn update(&self, owner: &OwnerId, list: &ShoppingList) -> Result<bool, DomainError>;

    /// Remove a list. `false` if it does not exist, including after a retry
    /// whose earlier attempt already removed it.
    /// Remove a list. `false` if it does not exist, including after a retry
    /// whose earlier attempt already removed it.
    async fn delete(&self, owner: &OwnerId, id: &ShoppingListId) -> Result<bool, DomainError>;
}

/// Repository for pantry stock
#[async_trait]
pub trait PantryRepository: Send + Sync {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<PantryIngredient>, DomainError>;

    async fn get(
        &self,
        owner: &OwnerId,
        id: &PantryIngredientId,
    ) -> Result<Option<PantryIngredient>, DomainError>;

    async fn add(
        &self,
        owner: &OwnerId,
        item: &NewPantryIngredient,
    ) -> Result<Option<PantryIngredient>, DomainError>;

    async fn update(&self, owner: &OwnerId, item: &PantryIngredient)
        -> Result<bool, DomainError>;

    /// Remove a pantry entry. Same `false` semantics as the other repositories.
    async fn delete(&self, owner: &OwnerId, id: &PantryIngredientId)
        -> Result<bool, DomainError>;
}

/// Repository for user profiles
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the profile of `uid`
    async fn get(&self, uid: &OwnerId) -> Result<Option<User>, DomainError>;

    /// Create or replace the profile. `user.uid` must equal `uid`.
    async fn save(&self, uid: &OwnerId, user: &User) -> Result<User, DomainError>;
}
