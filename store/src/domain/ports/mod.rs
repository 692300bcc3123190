//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod document_store;
pub mod repositories;

pub use document_store::{Document, DocumentStore};
pub use repositories::{
    PantryRepository, RecipeRepository, ShoppingListRepository, UserRepository,
};
