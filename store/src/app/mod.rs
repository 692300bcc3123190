//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between repositories; `Larder` wires everything up.

pub mod account_service;
pub mod larder;
pub mod restock_service;
pub mod shopping_service;

pub use account_service::{AccountService, UserSnapshot};
pub use larder::Larder;
pub use restock_service::{RestockReport, RestockService};
pub use shopping_service::{aggregate_ingredients, subtract_stock, ShoppingService};
