//! In-memory implementation of DocumentStore

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::OwnerId;
use crate::domain::ports::{Document, DocumentStore};
use crate::error::StoreError;

type CollectionKey = (OwnerId, String);

/// Documents grouped by (owner, collection), ordered by id
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<CollectionKey, BTreeMap<String, Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of documents across all owners and collections
    pub async fn len(&self) -> usize {
        self.collections
            .read()
            .await
            .values()
            .map(BTreeMap::len)
            .sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn key(owner: &OwnerId, collection: &str) -> CollectionKey {
    (owner.clone(), collection.to_string())
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn add_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(key(owner, collection)).or_default();
        if docs.contains_key(id) {
            return Ok(None);
        }
        docs.insert(id.to_string(), doc.clone());
        Ok(Some(doc.clone()))
    }

    async fn get_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&key(owner, collection))
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn get_all(
        &self,
        owner: &OwnerId,
        collection: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&key(owner, collection))
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn update_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        match collections
            .get_mut(&key(owner, collection))
            .and_then(|docs| docs.get_mut(id))
        {
            Some(stored) => {
                *stored = doc.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(&key(owner, collection))
            .and_then(|docs| docs.remove(id))
            .is_some())
    }
}
