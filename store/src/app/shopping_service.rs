//! Shopping service
//!
//! Builds shopping lists from recipes, leaving out what the pantry already
//! covers.

use std::sync::Arc;

use crate::domain::entities::{
    Ingredient, NewShoppingList, OwnerId, PantryIngredient, RecipeId, ShoppingList,
};
use crate::domain::ports::{PantryRepository, RecipeRepository, ShoppingListRepository};
use crate::error::DomainError;

/// Service for planning purchases
pub struct ShoppingService<R, S, P>
where
    R: RecipeRepository,
    S: ShoppingListRepository,
    P: PantryRepository,
{
    recipes: Arc<R>,
    shopping_lists: Arc<S>,
    pantry: Arc<P>,
}

impl<R, S, P> ShoppingService<R, S, P>
where
    R: RecipeRepository,
    S: ShoppingListRepository,
    P: PantryRepository,
{
    pub fn new(recipes: Arc<R>, shopping_lists: Arc<S>, pantry: Arc<P>) -> Self {
        Self {
            recipes,
            shopping_lists,
            pantry,
        }
    }

    /// Create a shopping list for cooking the given recipes
    ///
    /// Returns `None` (and stores nothing) when the pantry covers everything.
    pub async fn plan(
        &self,
        owner: &OwnerId,
        recipe_ids: &[RecipeId],
    ) -> Result<Option<ShoppingList>, DomainError> {
        let mut needed = Vec::new();
        for id in recipe_ids {
            let recipe = self
                .recipes
                .get(owner, id)
                .await?
                .ok_or_else(|| DomainError::NotFound(format!("Recipe {} not found", id)))?;
            needed.extend(recipe.ingredients);
        }

        let stock = self.pantry.list(owner).await?;
        let items = subtract_stock(aggregate_ingredients(&needed), &stock);
        if items.is_empty() {
            tracing::info!(owner = %owner, recipes = recipe_ids.len(), "Pantry covers all recipes");
            return Ok(None);
        }

        let list = self
            .shopping_lists
            .add(owner, &NewShoppingList::new(items))
            .await?
            .ok_or_else(|| DomainError::Conflict("Shopping list id already taken".to_string()))?;

        tracing::info!(owner = %owner, list = %list.id, items = list.items.len(), "Planned shopping list");
        Ok(Some(list))
    }
}

/// Combine ingredients with the same name and unit, case-insensitively
///
/// Quantities are summed; an unquantified entry adds nothing to a quantified
/// one. Order and spelling follow the first occurrence.
pub fn aggregate_ingredients(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let mut result: Vec<Ingredient> = Vec::new();

    for ing in ingredients {
        let existing = result
            .iter_mut()
            .find(|r| r.key() == ing.key() && r.unit_key() == ing.unit_key());

        match existing {
            Some(r) => {
                r.quantity = match (r.quantity, ing.quantity) {
                    (Some(a), Some(b)) => Some(a + b),
                    (a, b) => a.or(b),
                };
            }
            None => result.push(Ingredient {
                name: ing.name.trim().to_string(),
                quantity: ing.quantity,
                unit: ing.unit.clone(),
            }),
        }
    }

    result
}

/// Remove what is already in stock
///
/// Quantified items shrink by the matching stock and disappear once covered.
/// Unquantified items disappear when any stock of them is left.
pub fn subtract_stock(needed: Vec<Ingredient>, stock: &[PantryIngredient]) -> Vec<Ingredient> {
    needed
        .into_iter()
        .filter_map(|mut item| {
            let on_hand = stock
                .iter()
                .filter(|p| p.matches(&item))
                .map(|p| p.quantity)
                .sum::<f64>();

            match item.quantity {
                Some(quantity) => {
                    let missing = quantity - on_hand;
                    (missing > 0.0).then(|| {
                        item.quantity = Some(missing);
                        item
                    })
                }
                None => (on_hand <= 0.0).then_some(item),
            }
        })
        .collect()
}
