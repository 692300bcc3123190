//! Larder store
//!
//! Owner-scoped storage for recipes, shopping lists and pantry stock on top of
//! a remote document store. Uses hexagonal (ports & adapters) architecture:
//! repository traits in `domain::ports`, document-backed implementations in
//! `adapters`, and use cases in `app`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::Larder;
pub use config::Config;
pub use error::{ConfigError, DomainError, StoreError};
