//! Typed identifiers
//!
//! Document ids are opaque strings. Fresh ids are random UUIDs, but ids
//! supplied by callers (e.g. to make client retries idempotent) only have to
//! pass `validate_id`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Longest id accepted as a document key
pub const MAX_ID_LEN: usize = 128;

/// Behaviour shared by every entity id
pub trait EntityId: Clone + std::fmt::Display + Send + Sync + 'static {
    /// Generate a fresh id
    fn generate() -> Self;

    fn as_str(&self) -> &str;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl EntityId for $name {
            fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// External identity of a user; every owned document is scoped by it
    OwnerId
);
entity_id!(
    /// Unique identifier for a recipe within its owner's collection
    RecipeId
);
entity_id!(
    /// Unique identifier for a shopping list within its owner's collection
    ShoppingListId
);
entity_id!(
    /// Unique identifier for a pantry entry within its owner's collection
    PantryIngredientId
);

/// Check that an id can be used as a document key
pub fn validate_id(kind: &str, id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} id must not be empty", kind)));
    }
    if id.len() > MAX_ID_LEN {
        return Err(DomainError::Validation(format!(
            "{} id must be at most {} characters",
            kind, MAX_ID_LEN
        )));
    }
    if id.contains('/') {
        return Err(DomainError::Validation(format!(
            "{} id must not contain '/'",
            kind
        )));
    }
    Ok(())
}
