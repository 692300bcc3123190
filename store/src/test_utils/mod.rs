//! Test utilities
//!
//! Hand-written mocks and test fixtures for unit testing.
//!
//! The in-memory document store is a real adapter (see `adapters::memory`);
//! the mocks here wrap it to inject failures and latency.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
