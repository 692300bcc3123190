//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for owned collections and user profiles
//! - `ports`: Trait definitions for storage

pub mod entities;
pub mod ports;
