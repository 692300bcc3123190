//! Remote data source port
//!
//! Raw access to a schema-less document store. Documents are addressed by
//! owner, collection and id, so a call can never reach another owner's data.
//! Each call is atomic for the single document it touches.

use async_trait::async_trait;

use crate::domain::entities::OwnerId;
use crate::error::StoreError;

/// A stored document
pub type Document = serde_json::Value;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document. Returns `None` without writing if the id is taken.
    async fn add_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Fetch a single document
    async fn get_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Fetch every document in the owner's collection
    async fn get_all(&self, owner: &OwnerId, collection: &str)
        -> Result<Vec<Document>, StoreError>;

    /// Replace an existing document. Returns `false` if there is none.
    async fn update_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<bool, StoreError>;

    /// Remove a document. Returns `false` if there is none.
    async fn delete_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<bool, StoreError>;
}
