//! Document-backed repository
//!
//! One generic implementation serves every owned collection. It adds what the
//! raw store does not: owner scoping, id assignment, validation, duplicate
//! rejection, retries and error translation.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::adapters::document::RetryPolicy;
use crate::domain::entities::ids::validate_id;
use crate::domain::entities::{EntityId, OwnedEntity, OwnerId};
use crate::domain::ports::{Document, DocumentStore};
use crate::error::DomainError;

pub struct DocumentRepository<E> {
    store: Arc<dyn DocumentStore>,
    policy: RetryPolicy,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for DocumentRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            policy: self.policy.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: OwnedEntity> DocumentRepository<E> {
    pub fn new(store: Arc<dyn DocumentStore>, policy: RetryPolicy) -> Self {
        Self {
            store,
            policy,
            _entity: PhantomData,
        }
    }

    /// All entities in the owner's collection
    pub async fn fetch_all(&self, owner: &OwnerId) -> Result<Vec<E>, DomainError> {
        validate_id("owner", owner.as_str())?;

        let docs = self
            .policy
            .run("list", || self.store.get_all(owner, E::COLLECTION))
            .await?;

        let mut entities = Vec::with_capacity(docs.len());
        for doc in docs {
            let entity = decode::<E>(doc)?;
            if entity.owner_id() != owner {
                tracing::warn!(
                    collection = E::COLLECTION,
                    owner = %owner,
                    id = %entity.id(),
                    "Dropping document owned by another user"
                );
                continue;
            }
            entities.push(entity);
        }

        tracing::debug!(collection = E::COLLECTION, owner = %owner, count = entities.len(), "Listed documents");
        Ok(entities)
    }

    pub async fn fetch(&self, owner: &OwnerId, id: &E::Id) -> Result<Option<E>, DomainError> {
        validate_id("owner", owner.as_str())?;
        validate_id(E::KIND, id.as_str())?;

        let doc = self
            .policy
            .run("get", || {
                self.store.get_document(owner, E::COLLECTION, id.as_str())
            })
            .await?;

        match doc {
            Some(doc) => {
                let entity = decode::<E>(doc)?;
                Ok((entity.owner_id() == owner).then_some(entity))
            }
            None => Ok(None),
        }
    }

    /// Persist a new entity. `Ok(None)` when the id is already taken.
    pub async fn insert(&self, owner: &OwnerId, draft: &E::Draft) -> Result<Option<E>, DomainError> {
        validate_id("owner", owner.as_str())?;

        // The id is fixed before the first attempt so retries write the same document
        let id = E::draft_id(draft).cloned().unwrap_or_else(E::Id::generate);
        let entity = E::from_draft(draft, id, owner.clone());
        entity.validate()?;
        let doc = encode(&entity)?;

        let mut attempts = 0u32;
        let created = self
            .policy
            .run("add", || {
                attempts += 1;
                self.store
                    .add_document(owner, E::COLLECTION, entity.id().as_str(), &doc)
            })
            .await?;

        if created.is_some() {
            tracing::debug!(collection = E::COLLECTION, owner = %owner, id = %entity.id(), "Created document");
            return Ok(Some(entity));
        }

        // An earlier attempt may have landed before its reply was lost
        if attempts > 1 && self.fetch(owner, entity.id()).await?.as_ref() == Some(&entity) {
            tracing::debug!(
                collection = E::COLLECTION,
                id = %entity.id(),
                "Create confirmed after retry"
            );
            return Ok(Some(entity));
        }

        tracing::info!(
            collection = E::COLLECTION,
            owner = %owner,
            id = %entity.id(),
            "Rejected create of existing id"
        );
        Ok(None)
    }

    /// Replace a stored entity. `Ok(false)` when there is none for this owner.
    pub async fn replace(&self, owner: &OwnerId, entity: &E) -> Result<bool, DomainError> {
        validate_id("owner", owner.as_str())?;
        if entity.owner_id() != owner {
            return Err(DomainError::PermissionDenied(format!(
                "{} {} does not belong to {}",
                E::KIND,
                entity.id(),
                owner
            )));
        }
        entity.validate()?;
        let doc = encode(entity)?;

        let updated = self
            .policy
            .run("update", || {
                self.store
                    .update_document(owner, E::COLLECTION, entity.id().as_str(), &doc)
            })
            .await?;

        tracing::debug!(collection = E::COLLECTION, id = %entity.id(), updated, "Replaced document");
        Ok(updated)
    }

    /// Remove an entity. `Ok(false)` when there is none for this owner.
    ///
    /// If an attempt deletes the document but its reply is lost, the retry
    /// finds nothing and reports `Ok(false)`. The document is gone either way.
    pub async fn remove(&self, owner: &OwnerId, id: &E::Id) -> Result<bool, DomainError> {
        validate_id("owner", owner.as_str())?;
        validate_id(E::KIND, id.as_str())?;

        let deleted = self
            .policy
            .run("delete", || {
                self.store.delete_document(owner, E::COLLECTION, id.as_str())
            })
            .await?;

        tracing::debug!(collection = E::COLLECTION, id = %id, deleted, "Deleted document");
        Ok(deleted)
    }
}

fn encode<E: OwnedEntity>(entity: &E) -> Result<Document, DomainError> {
    serde_json::to_value(entity)
        .map_err(|e| DomainError::Internal(format!("Failed to encode {}: {}", E::KIND, e)))
}

fn decode<E: OwnedEntity>(doc: Document) -> Result<E, DomainError> {
    serde_json::from_value(doc).map_err(|e| {
        DomainError::Internal(format!("Stored {} is not readable: {}", E::KIND, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentStore;
    use crate::domain::entities::{Ingredient, NewRecipe, Recipe, RecipeId};
    use crate::test_utils::{fast_retry_policy, FlakyDocumentStore, Fault};

    fn repo(store: Arc<dyn DocumentStore>) -> DocumentRepository<Recipe> {
        DocumentRepository::new(store, fast_retry_policy())
    }

    fn owner() -> OwnerId {
        OwnerId::from("user-1")
    }

    #[tokio::test]
    async fn insert_generates_id_and_stamps_owner() {
        let repo = repo(Arc::new(InMemoryDocumentStore::new()));
        let recipe = repo
            .insert(&owner(), &NewRecipe::new("Soup"))
            .await
            .unwrap()
            .unwrap();

        assert!(!recipe.id.0.is_empty());
        assert_eq!(recipe.owner_id, owner());
    }

    #[tokio::test]
    async fn insert_rejects_invalid_entity() {
        let repo = repo(Arc::new(InMemoryDocumentStore::new()));
        let err = repo
            .insert(&owner(), &NewRecipe::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = repo
            .insert(&OwnerId::from(""), &NewRecipe::new("Soup"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn insert_confirms_write_whose_reply_was_lost() {
        let inner = Arc::new(InMemoryDocumentStore::new());
        let flaky = Arc::new(FlakyDocumentStore::new(inner.clone()));
        flaky.push_fault(Fault::LostReply);
        let repo = repo(flaky.clone());

        let recipe = repo
            .insert(&owner(), &NewRecipe::new("Soup").with_id("r1"))
            .await
            .unwrap();

        assert_eq!(recipe.map(|r| r.id), Some(RecipeId::from("r1")));
        assert_eq!(flaky.calls(), 3); // lost add, conflicting add, confirming get
        assert_eq!(inner.len().await, 1);
    }

    #[tokio::test]
    async fn remove_whose_reply_was_lost_reports_false() {
        let inner = Arc::new(InMemoryDocumentStore::new());
        let flaky = Arc::new(FlakyDocumentStore::new(inner.clone()));
        let repo = repo(flaky.clone());
        repo.insert(&owner(), &NewRecipe::new("Soup").with_id("r1"))
            .await
            .unwrap()
            .unwrap();

        flaky.push_fault(Fault::LostReply);
        let deleted = repo.remove(&owner(), &RecipeId::from("r1")).await.unwrap();

        assert!(!deleted);
        assert!(inner.is_empty().await);
    }

    #[tokio::test]
    async fn insert_after_lost_reply_still_detects_foreign_conflict() {
        let inner = Arc::new(InMemoryDocumentStore::new());
        let repo_direct = repo(inner.clone());
        repo_direct
            .insert(&owner(), &NewRecipe::new("Stew").with_id("r1"))
            .await
            .unwrap()
            .unwrap();

        let flaky = Arc::new(FlakyDocumentStore::new(inner));
        flaky.push_fault(Fault::Fail(crate::error::StoreError::Timeout(5)));
        let repo = repo(flaky);

        let result = repo
            .insert(&owner(), &NewRecipe::new("Soup").with_id("r1"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn replace_refuses_foreign_owner_field() {
        let repo = repo(Arc::new(InMemoryDocumentStore::new()));
        let mut recipe = repo
            .insert(&owner(), &NewRecipe::new("Soup"))
            .await
            .unwrap()
            .unwrap();
        recipe.owner_id = OwnerId::from("user-2");

        let err = repo.replace(&owner(), &recipe).await.unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn fetch_all_drops_documents_of_other_owners() {
        let store = Arc::new(InMemoryDocumentStore::new());
        // A misfiled document: stored under user-1 but claiming user-2
        store
            .add_document(
                &owner(),
                "recipes",
                "stray",
                &serde_json::json!({ "id": "stray", "owner_id": "user-2", "name": "Pie" }),
            )
            .await
            .unwrap();
        let repo = repo(store);
        repo.insert(&owner(), &NewRecipe::new("Soup").with_ingredients(vec![Ingredient::named("Salt")]))
            .await
            .unwrap();

        let recipes = repo.fetch_all(&owner()).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup");
        assert!(repo
            .fetch(&owner(), &RecipeId::from("stray"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn unreadable_document_is_internal_error() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .add_document(&owner(), "recipes", "bad", &serde_json::json!({ "id": 7 }))
            .await
            .unwrap();
        let repo = repo(store);

        let err = repo.fetch_all(&owner()).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn remove_rejects_malformed_id() {
        let repo = repo(Arc::new(InMemoryDocumentStore::new()));
        let err = repo
            .remove(&owner(), &RecipeId::from("../other"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
