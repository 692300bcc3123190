//! Shopping list domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{validate_id, OwnerId, ShoppingListId};
use super::ingredient::Ingredient;
use super::owned::OwnedEntity;
use crate::error::DomainError;

/// Ingredients a user still has to buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ShoppingListId,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<Ingredient>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn with_items(mut self, items: Vec<Ingredient>) -> Self {
        self.items = items;
        self
    }

    /// Copy of this list without the item at `index`
    pub fn without_item(&self, index: usize) -> Self {
        let mut list = self.clone();
        if index < list.items.len() {
            list.items.remove(index);
        }
        list
    }
}

/// Data needed to create a new shopping list
#[derive(Debug, Clone, Default)]
pub struct NewShoppingList {
    pub id: Option<ShoppingListId>,
    /// Defaults to the time of `add`
    pub created_at: Option<DateTime<Utc>>,
    pub items: Vec<Ingredient>,
}

impl NewShoppingList {
    pub fn new(items: Vec<Ingredient>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<ShoppingListId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

impl OwnedEntity for ShoppingList {
    type Id = ShoppingListId;
    type Draft = NewShoppingList;

    const COLLECTION: &'static str = "shopping_lists";
    const KIND: &'static str = "Shopping list";

    fn id(&self) -> &ShoppingListId {
        &self.id
    }

    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    fn draft_id(draft: &NewShoppingList) -> Option<&ShoppingListId> {
        draft.id.as_ref()
    }

    fn from_draft(draft: &NewShoppingList, id: ShoppingListId, owner: OwnerId) -> Self {
        ShoppingList {
            id,
            owner_id: owner,
            created_at: draft.created_at.unwrap_or_else(Utc::now),
            items: draft.items.clone(),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_id("shopping list", &self.id.0)?;
        self.items.iter().try_for_each(Ingredient::validate)
    }
}
