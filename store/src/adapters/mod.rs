//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod document;
pub mod http;
pub mod memory;

pub use document::{
    DocumentRepository, PantryDocuments, RecipeDocuments, RetryPolicy, ShoppingListDocuments,
    UserDocuments,
};
pub use http::HttpDocumentStore;
pub use memory::InMemoryDocumentStore;
