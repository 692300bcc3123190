//! Ingredient value type
//!
//! Used inside recipes and shopping lists. Pantry stock has its own entity
//! (`PantryIngredient`) because it is stored as a document of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// An ingredient with an optional amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    /// An ingredient with just a name (e.g. "Salt")
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    /// An ingredient with an amount and an optional unit
    pub fn with_quantity(name: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: unit.map(str::to_string),
        }
    }

    /// Matching key: trimmed, lower-cased name
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Matching key for the unit
    pub fn unit_key(&self) -> Option<String> {
        normalize_unit(self.unit.as_deref())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Ingredient name must not be empty".to_string(),
            ));
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(&self.name, quantity)?;
        }
        Ok(())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.quantity, &self.unit) {
            (Some(qty), Some(unit)) => write!(f, "{} {} {}", qty, unit, self.name),
            (Some(qty), None) => write!(f, "{} {}", qty, self.name),
            (None, _) => write!(f, "{}", self.name),
        }
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

pub(crate) fn normalize_unit(unit: Option<&str>) -> Option<String> {
    unit.map(normalize).filter(|u| !u.is_empty())
}

pub(crate) fn validate_quantity(name: &str, quantity: f64) -> Result<(), DomainError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(DomainError::Validation(format!(
            "Quantity for '{}' must be a non-negative number",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case_and_whitespace() {
        assert_eq!(Ingredient::named("  Olive Oil ").key(), "olive oil");
    }

    #[test]
    fn blank_unit_has_no_key() {
        let ingredient = Ingredient::with_quantity("Eggs", 2.0, Some("  "));
        assert_eq!(ingredient.unit_key(), None);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Ingredient::named("Salt").to_string(), "Salt");
        assert_eq!(
            Ingredient::with_quantity("Eggs", 2.0, None).to_string(),
            "2 Eggs"
        );
        assert_eq!(
            Ingredient::with_quantity("Flour", 1.5, Some("kg")).to_string(),
            "1.5 kg Flour"
        );
    }

    #[test]
    fn validation() {
        assert!(Ingredient::named("Salt").validate().is_ok());
        assert!(Ingredient::named(" ").validate().is_err());
        assert!(Ingredient::with_quantity("Milk", -1.0, None)
            .validate()
            .is_err());
        assert!(Ingredient::with_quantity("Milk", f64::NAN, None)
            .validate()
            .is_err());
    }

    #[test]
    fn unquantified_ingredient_omits_fields() {
        let json = serde_json::to_value(Ingredient::named("Water")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Water" }));
    }
}
