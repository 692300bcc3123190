//! Repository trait implementations per collection

use async_trait::async_trait;

use super::DocumentRepository;
use crate::domain::entities::{
    NewPantryIngredient, NewRecipe, NewShoppingList, OwnerId, PantryIngredient,
    PantryIngredientId, Recipe, RecipeId, ShoppingList, ShoppingListId, User,
};
use crate::domain::ports::{
    PantryRepository, RecipeRepository, ShoppingListRepository, UserRepository,
};
use crate::error::DomainError;

pub type RecipeDocuments = DocumentRepository<Recipe>;
pub type ShoppingListDocuments = DocumentRepository<ShoppingList>;
pub type PantryDocuments = DocumentRepository<PantryIngredient>;
pub type UserDocuments = DocumentRepository<User>;

#[async_trait]
impl RecipeRepository for RecipeDocuments {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<Recipe>, DomainError> {
        self.fetch_all(owner).await
    }

    async fn get(&self, owner: &OwnerId, id: &RecipeId) -> Result<Option<Recipe>, DomainError> {
        self.fetch(owner, id).await
    }

    async fn add(
        &self,
        owner: &OwnerId,
        recipe: &NewRecipe,
    ) -> Result<Option<Recipe>, DomainError> {
        self.insert(owner, recipe).await
    }

    async fn update(&self, owner: &OwnerId, recipe: &Recipe) -> Result<bool, DomainError> {
        self.replace(owner, recipe).await
    }

    async fn delete(&self, owner: &OwnerId, id: &RecipeId) -> Result<bool, DomainError> {
        self.remove(owner, id).await
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListDocuments {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<ShoppingList>, DomainError> {
        self.fetch_all(owner).await
    }

    async fn get(
        &self,
        owner: &OwnerId,
        id: &ShoppingListId,
    ) -> Result<Option<ShoppingList>, DomainError> {
        self.fetch(owner, id).await
    }

    async fn add(
        &self,
        owner: &OwnerId,
        list: &NewShoppingList,
    ) -> Result<Option<ShoppingList>, DomainError> {
        self.insert(owner, list).await
    }

    async fn update(&self, owner: &OwnerId, list: &ShoppingList) -> Result<bool, DomainError> {
        self.replace(owner, list).await
    }

    async fn delete(&self, owner: &OwnerId, id: &ShoppingListId) -> Result<bool, DomainError> {
        self.remove(owner, id).await
    }
}

#[async_trait]
impl PantryRepository for PantryDocuments {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<PantryIngredient>, DomainError> {
        self.fetch_all(owner).await
    }

    async fn get(
        &self,
        owner: &OwnerId,
        id: &PantryIngredientId,
    ) -> Result<Option<PantryIngredient>, DomainError> {
        self.fetch(owner, id).await
    }

    async fn add(
        &self,
        owner: &OwnerId,
        item: &NewPantryIngredient,
    ) -> Result<Option<PantryIngredient>, DomainError> {
        self.insert(owner, item).await
    }

    async fn update(
        &self,
        owner: &OwnerId,
        item: &PantryIngredient,
    ) -> Result<bool, DomainError> {
        self.replace(owner, item).await
    }

    async fn delete(
        &self,
        owner: &OwnerId,
        id: &PantryIngredientId,
    ) -> Result<bool, DomainError> {
        self.remove(owner, id).await
    }
}

#[async_trait]
impl UserRepository for UserDocuments {
    async fn get(&self, uid: &OwnerId) -> Result<Option<User>, DomainError> {
        self.fetch(uid, uid).await
    }

    async fn save(&self, uid: &OwnerId, user: &User) -> Result<User, DomainError> {
        if &user.uid != uid {
            return Err(DomainError::PermissionDenied(format!(
                "Profile {} cannot be written as {}",
                user.uid, uid
            )));
        }

        if self.replace(uid, user).await? {
            return Ok(user.clone());
        }
        if let Some(created) = self.insert(uid, user).await? {
            return Ok(created);
        }

        // Created concurrently between the two calls above
        if self.replace(uid, user).await? {
            Ok(user.clone())
        } else {
            Err(DomainError::Conflict(format!(
                "Profile {} changed while saving",
                uid
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::memory::InMemoryDocumentStore;
    use crate::domain::entities::{Ingredient, Subscription};
    use crate::domain::ports::DocumentStore;
    use crate::test_utils::fast_retry_policy;

    fn store() -> Arc<dyn DocumentStore> {
        Arc::new(InMemoryDocumentStore::new())
    }

    #[tokio::test]
    async fn recipe_lifecycle() {
        let recipes = RecipeDocuments::new(store(), fast_retry_policy());
        let owner = OwnerId::from("user-1");

        let soup = recipes
            .add(
                &owner,
                &NewRecipe::new("Soup").with_ingredients(vec![
                    Ingredient::named("Salt"),
                    Ingredient::named("Water"),
                ]),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(recipes.list(&owner).await.unwrap(), vec![soup.clone()]);

        let renamed = soup.clone().with_name("Tomato Soup");
        assert!(recipes.update(&owner, &renamed).await.unwrap());
        assert_eq!(
            recipes.get(&owner, &soup.id).await.unwrap().unwrap().name,
            "Tomato Soup"
        );

        assert!(recipes.delete(&owner, &soup.id).await.unwrap());
        assert!(!recipes.delete(&owner, &soup.id).await.unwrap());
        assert!(recipes.list(&owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn shopping_list_add_with_taken_id_returns_none() {
        let lists = ShoppingListDocuments::new(store(), fast_retry_policy());
        let owner = OwnerId::from("user-1");

        let first = lists
            .add(&owner, &NewShoppingList::new(vec![Ingredient::named("Milk")]).with_id("s1"))
            .await
            .unwrap();
        assert!(first.is_some());

        let second = lists
            .add(&owner, &NewShoppingList::new(vec![Ingredient::named("Bread")]).with_id("s1"))
            .await
            .unwrap();
        assert!(second.is_none());

        let stored = lists.list(&owner).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].items, vec![Ingredient::named("Milk")]);
    }

    #[tokio::test]
    async fn pantry_update_of_missing_item_does_not_insert() {
        let pantry = PantryDocuments::new(store(), fast_retry_policy());
        let owner = OwnerId::from("user-1");

        let ghost = PantryIngredient {
            id: PantryIngredientId::from("p404"),
            owner_id: owner.clone(),
            name: "Rice".to_string(),
            quantity: 1.0,
            unit: Some("kg".to_string()),
        };

        assert!(!pantry.update(&owner, &ghost).await.unwrap());
        assert!(pantry.list(&owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn user_save_is_upsert() {
        let users = UserDocuments::new(store(), fast_retry_policy());
        let uid = OwnerId::from("uid-1");

        assert!(users.get(&uid).await.unwrap().is_none());

        let created = users
            .save(&uid, &User::new("uid-1").with_display_name("Ada"))
            .await
            .unwrap();
        assert_eq!(created.display_name.as_deref(), Some("Ada"));

        let upgraded = created.with_subscription(Subscription::Premium);
        users.save(&uid, &upgraded).await.unwrap();

        let stored = users.get(&uid).await.unwrap().unwrap();
        assert!(stored.is_premium());
    }

    #[tokio::test]
    async fn user_save_refuses_other_profile() {
        let users = UserDocuments::new(store(), fast_retry_policy());
        let err = users
            .save(&OwnerId::from("uid-1"), &User::new("uid-2"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }
}
