//! In-memory adapter
//!
//! Process-local document store used for tests and offline runs.

pub mod document_store;

pub use document_store::InMemoryDocumentStore;
