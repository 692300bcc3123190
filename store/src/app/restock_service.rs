//! Restock service
//!
//! Moves a finished shopping list into the pantry. The move touches several
//! documents and is not atomic. Items are taken off the list one at a time
//! right after they land in the pantry, so running it again after a failure
//! picks up where it stopped. At most the item in flight when the failure
//! happened can be counted twice.

use std::sync::Arc;

use crate::domain::entities::{
    Ingredient, NewPantryIngredient, OwnerId, PantryIngredient, ShoppingListId,
};
use crate::domain::ports::{PantryRepository, ShoppingListRepository};
use crate::error::DomainError;

/// Outcome of a restock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestockReport {
    /// Items added onto an existing pantry entry
    pub merged: usize,
    /// Items that became new pantry entries
    pub added: usize,
    /// Whether the emptied list was removed
    pub list_deleted: bool,
}

/// Service for moving purchases into the pantry
pub struct RestockService<S, P>
where
    S: ShoppingListRepository,
    P: PantryRepository,
{
    shopping_lists: Arc<S>,
    pantry: Arc<P>,
}

impl<S, P> RestockService<S, P>
where
    S: ShoppingListRepository,
    P: PantryRepository,
{
    pub fn new(shopping_lists: Arc<S>, pantry: Arc<P>) -> Self {
        Self {
            shopping_lists,
            pantry,
        }
    }

    /// Put every item of the list into the pantry, then delete the list
    ///
    /// Unquantified items count as one unit.
    pub async fn restock(
        &self,
        owner: &OwnerId,
        list_id: &ShoppingListId,
    ) -> Result<RestockReport, DomainError> {
        let mut list = self
            .shopping_lists
            .get(owner, list_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Shopping list {} not found", list_id)))?;
        let mut stock = self.pantry.list(owner).await?;
        let mut report = RestockReport::default();

        while let Some(item) = list.items.first().cloned() {
            match stock.iter().position(|p| p.matches(&item)) {
                Some(index) => {
                    let restocked = stock[index].restocked(item.quantity.unwrap_or(1.0));
                    if self.pantry.update(owner, &restocked).await? {
                        stock[index] = restocked;
                        report.merged += 1;
                    } else {
                        // Removed from the pantry since we listed it
                        stock[index] = self.add_to_pantry(owner, &item).await?;
                        report.added += 1;
                    }
                }
                None => {
                    stock.push(self.add_to_pantry(owner, &item).await?);
                    report.added += 1;
                }
            }

            list = list.without_item(0);
            if !list.is_empty() && !self.shopping_lists.update(owner, &list).await? {
                return Err(DomainError::NotFound(format!(
                    "Shopping list {} was removed while restocking",
                    list_id
                )));
            }
        }

        report.list_deleted = self.shopping_lists.delete(owner, list_id).await?;

        tracing::info!(
            owner = %owner,
            list = %list_id,
            merged = report.merged,
            added = report.added,
            "Restocked pantry from shopping list"
        );
        Ok(report)
    }

    async fn add_to_pantry(
        &self,
        owner: &OwnerId,
        item: &Ingredient,
    ) -> Result<PantryIngredient, DomainError> {
        self.pantry
            .add(owner, &NewPantryIngredient::from(item))
            .await?
            .ok_or_else(|| {
                DomainError::Conflict(format!("Pantry entry for '{}' already exists", item.name))
            })
    }
}
