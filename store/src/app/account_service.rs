//! Account service
//!
//! Profile management and whole-account reads. Collections are stored
//! separately from the profile, so a snapshot is assembled from four reads
//! issued concurrently; it is not a transactional view.

use std::sync::Arc;

use crate::domain::entities::{OwnerId, PantryIngredient, Recipe, ShoppingList, User};
use crate::domain::ports::{
    PantryRepository, RecipeRepository, ShoppingListRepository, UserRepository,
};
use crate::error::DomainError;

/// Everything a user owns, read at roughly the same moment
#[derive(Debug, Clone)]
pub struct UserSnapshot {
    pub user: Option<User>,
    pub recipes: Vec<Recipe>,
    pub shopping_lists: Vec<ShoppingList>,
    pub pantry: Vec<PantryIngredient>,
}

impl UserSnapshot {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.shopping_lists.is_empty() && self.pantry.is_empty()
    }
}

/// Service for user profiles and account-wide reads
pub struct AccountService<U, R, S, P>
where
    U: UserRepository,
    R: RecipeRepository,
    S: ShoppingListRepository,
    P: PantryRepository,
{
    users: Arc<U>,
    recipes: Arc<R>,
    shopping_lists: Arc<S>,
    pantry: Arc<P>,
}

impl<U, R, S, P> AccountService<U, R, S, P>
where
    U: UserRepository,
    R: RecipeRepository,
    S: ShoppingListRepository,
    P: PantryRepository,
{
    pub fn new(users: Arc<U>, recipes: Arc<R>, shopping_lists: Arc<S>, pantry: Arc<P>) -> Self {
        Self {
            users,
            recipes,
            shopping_lists,
            pantry,
        }
    }

    /// Create or replace the profile of the signed-in user
    pub async fn save_profile(&self, owner: &OwnerId, user: &User) -> Result<User, DomainError> {
        let saved = self.users.save(owner, user).await?;
        tracing::info!(uid = %owner, subscription = %saved.subscription, "Saved profile");
        Ok(saved)
    }

    /// Find the profile of the signed-in user
    pub async fn profile(&self, owner: &OwnerId) -> Result<Option<User>, DomainError> {
        self.users.get(owner).await
    }

    /// Read the profile and all three collections
    pub async fn snapshot(&self, owner: &OwnerId) -> Result<UserSnapshot, DomainError> {
        let (user, recipes, shopping_lists, pantry) = tokio::try_join!(
            self.users.get(owner),
            self.recipes.list(owner),
            self.shopping_lists.list(owner),
            self.pantry.list(owner),
        )?;

        Ok(UserSnapshot {
            user,
            recipes,
            shopping_lists,
            pantry,
        })
    }
}
