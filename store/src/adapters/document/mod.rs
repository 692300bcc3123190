//! Document store adapters for the repository ports
//!
//! `DocumentRepository<E>` implements the per-collection repository traits on
//! top of any `DocumentStore`.

pub mod collections;
pub mod repository;
pub mod retry;

pub use collections::{PantryDocuments, RecipeDocuments, ShoppingListDocuments, UserDocuments};
pub use repository::DocumentRepository;
pub use retry::RetryPolicy;
