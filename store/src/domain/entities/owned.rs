//! Owner-scoped documents
//!
//! Every entity stored per user implements `OwnedEntity`, which lets one
//! document-backed repository serve all collections.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ids::{EntityId, OwnerId};
use crate::error::DomainError;

pub trait OwnedEntity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Id: EntityId;

    /// Data needed to create a new entity. Never carries an owner.
    type Draft: Send + Sync;

    /// Collection name in the document store
    const COLLECTION: &'static str;

    /// Human-readable entity kind for messages
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    fn owner_id(&self) -> &OwnerId;

    /// Id requested by the caller, if any
    fn draft_id(draft: &Self::Draft) -> Option<&Self::Id>;

    /// Build the entity to persist; `owner` always comes from the caller's scope
    fn from_draft(draft: &Self::Draft, id: Self::Id, owner: OwnerId) -> Self;

    /// Field-level checks that run before every write
    fn validate(&self) -> Result<(), DomainError>;
}
