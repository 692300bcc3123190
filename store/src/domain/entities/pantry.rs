//! Pantry stock entity
//!
//! One document per ingredient a user keeps at home.

use serde::{Deserialize, Serialize};

use super::ids::{validate_id, OwnerId, PantryIngredientId};
use super::ingredient::{normalize, normalize_unit, validate_quantity, Ingredient};
use super::owned::OwnedEntity;
use crate::error::DomainError;

/// An ingredient in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryIngredient {
    pub id: PantryIngredientId,
    pub owner_id: OwnerId,
    pub name: String,
    /// Amount on hand
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl PantryIngredient {
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Same ingredient, measured in the same unit
    pub fn matches(&self, ingredient: &Ingredient) -> bool {
        self.key() == ingredient.key()
            && normalize_unit(self.unit.as_deref()) == ingredient.unit_key()
    }

    /// Copy with `amount` added to the stock
    pub fn restocked(&self, amount: f64) -> Self {
        let mut item = self.clone();
        item.quantity += amount;
        item
    }

    pub fn as_ingredient(&self) -> Ingredient {
        Ingredient {
            name: self.name.clone(),
            quantity: Some(self.quantity),
            unit: self.unit.clone(),
        }
    }
}

/// Data needed to create a new pantry entry
#[derive(Debug, Clone)]
pub struct NewPantryIngredient {
    pub id: Option<PantryIngredientId>,
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
}

impl NewPantryIngredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            unit: unit.map(str::to_string),
        }
    }

    pub fn with_id(mut self, id: impl Into<PantryIngredientId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<&Ingredient> for NewPantryIngredient {
    /// Unquantified ingredients count as one unit
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: None,
            name: ingredient.name.trim().to_string(),
            quantity: ingredient.quantity.unwrap_or(1.0),
            unit: ingredient.unit.clone(),
        }
    }
}

impl OwnedEntity for PantryIngredient {
    type Id = PantryIngredientId;
    type Draft = NewPantryIngredient;

    const COLLECTION: &'static str = "pantry";
    const KIND: &'static str = "Pantry ingredient";

    fn id(&self) -> &PantryIngredientId {
        &self.id
    }

    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    fn draft_id(draft: &NewPantryIngredient) -> Option<&PantryIngredientId> {
        draft.id.as_ref()
    }

    fn from_draft(draft: &NewPantryIngredient, id: PantryIngredientId, owner: OwnerId) -> Self {
        PantryIngredient {
            id,
            owner_id: owner,
            name: draft.name.clone(),
            quantity: draft.quantity,
            unit: draft.unit.clone(),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_id("pantry ingredient", &self.id.0)?;
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Pantry ingredient name must not be empty".to_string(),
            ));
        }
        validate_quantity(&self.name, self.quantity)
    }
}
