//! Remote document store adapter
//!
//! Talks to the hosted document store over its REST API.

pub mod client;

pub use client::HttpDocumentStore;
