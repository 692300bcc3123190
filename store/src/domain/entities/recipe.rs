//! Recipe domain entity

use serde::{Deserialize, Serialize};

use super::ids::{validate_id, OwnerId, RecipeId};
use super::ingredient::Ingredient;
use super::owned::OwnedEntity;
use crate::error::DomainError;

/// A recipe owned by one user
///
/// Snapshots are replaced as a whole on update; the `with_*` helpers return
/// a modified copy for that purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub owner_id: OwnerId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered; empty while the recipe is still a draft
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// A recipe without ingredients is still being written
    pub fn is_draft(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url;
        self
    }
}

/// Data needed to create a new recipe
#[derive(Debug, Clone, Default)]
pub struct NewRecipe {
    /// Caller-chosen id; generated when `None`
    pub id: Option<RecipeId>,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub photo_url: Option<String>,
    pub instructions: String,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<RecipeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}

impl OwnedEntity for Recipe {
    type Id = RecipeId;
    type Draft = NewRecipe;

    const COLLECTION: &'static str = "recipes";
    const KIND: &'static str = "Recipe";

    fn id(&self) -> &RecipeId {
        &self.id
    }

    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    fn draft_id(draft: &NewRecipe) -> Option<&RecipeId> {
        draft.id.as_ref()
    }

    fn from_draft(draft: &NewRecipe, id: RecipeId, owner: OwnerId) -> Self {
        Recipe {
            id,
            owner_id: owner,
            name: draft.name.clone(),
            description: draft.description.clone(),
            ingredients: draft.ingredients.clone(),
            photo_url: draft.photo_url.clone(),
            instructions: draft.instructions.clone(),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_id("recipe", &self.id.0)?;
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Recipe name must not be empty".to_string(),
            ));
        }
        self.ingredients.iter().try_for_each(Ingredient::validate)
    }
}
