//! Composition root
//!
//! Builds the document store, the repositories on top of it and the services
//! that use them. Consumers receive what they need from here explicitly.

use std::sync::Arc;

use crate::adapters::document::{
    PantryDocuments, RecipeDocuments, RetryPolicy, ShoppingListDocuments, UserDocuments,
};
use crate::adapters::http::HttpDocumentStore;
use crate::adapters::memory::InMemoryDocumentStore;
use crate::app::{AccountService, RestockService, ShoppingService};
use crate::config::{Backend, Config};
use crate::domain::ports::DocumentStore;
use crate::error::ConfigError;

/// Everything the application needs, wired together
pub struct Larder {
    pub recipes: Arc<RecipeDocuments>,
    pub shopping_lists: Arc<ShoppingListDocuments>,
    pub pantry: Arc<PantryDocuments>,
    pub users: Arc<UserDocuments>,
    pub accounts: AccountService<UserDocuments, RecipeDocuments, ShoppingListDocuments, PantryDocuments>,
    pub restock: RestockService<ShoppingListDocuments, PantryDocuments>,
    pub shopping: ShoppingService<RecipeDocuments, ShoppingListDocuments, PantryDocuments>,
}

impl Larder {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let store: Arc<dyn DocumentStore> = match config.backend {
            Backend::Http => {
                let url = config
                    .store_url
                    .clone()
                    .ok_or(ConfigError::Missing("LARDER_STORE_URL"))?;
                tracing::info!(url = %url, "Using remote document store");
                Arc::new(HttpDocumentStore::new(url, config.store_token.clone()))
            }
            Backend::Memory => {
                tracing::info!("Using in-memory document store");
                Arc::new(InMemoryDocumentStore::new())
            }
        };

        Ok(Self::with_store(store, RetryPolicy::from_config(config)))
    }

    pub fn with_store(store: Arc<dyn DocumentStore>, policy: RetryPolicy) -> Self {
        let recipes = Arc::new(RecipeDocuments::new(store.clone(), policy.clone()));
        let shopping_lists = Arc::new(ShoppingListDocuments::new(store.clone(), policy.clone()));
        let pantry = Arc::new(PantryDocuments::new(store.clone(), policy.clone()));
        let users = Arc::new(UserDocuments::new(store, policy));

        Self {
            accounts: AccountService::new(
                users.clone(),
                recipes.clone(),
                shopping_lists.clone(),
                pantry.clone(),
            ),
            restock: RestockService::new(shopping_lists.clone(), pantry.clone()),
            shopping: ShoppingService::new(recipes.clone(), shopping_lists.clone(), pantry.clone()),
            recipes,
            shopping_lists,
            pantry,
            users,
        }
    }
}
