//! Ingredient records and their categories.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Category an ingredient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientType {
    Wrap,
    Protein,
    Veggies,
    Cheese,
    Sauce,
}

impl IngredientType {
    /// Every category, in declaration order.
    pub const ALL: [IngredientType; 5] = [
        IngredientType::Wrap,
        IngredientType::Protein,
        IngredientType::Veggies,
        IngredientType::Cheese,
        IngredientType::Sauce,
    ];

    /// Upper-case name, as the category is written in the catalog table.
    pub fn as_str(self) -> &'static str {
        match self {
            IngredientType::Wrap => "WRAP",
            IngredientType::Protein => "PROTEIN",
            IngredientType::Veggies => "VEGGIES",
            IngredientType::Cheese => "CHEESE",
            IngredientType::Sauce => "SAUCE",
        }
    }

    /// Lower-case key the category's partition is bound under in a model.
    pub fn key(self) -> &'static str {
        match self {
            IngredientType::Wrap => "wrap",
            IngredientType::Protein => "protein",
            IngredientType::Veggies => "veggies",
            IngredientType::Cheese => "cheese",
            IngredientType::Sauce => "sauce",
        }
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IngredientType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown ingredient type: {s}")))
    }
}

/// A selectable taco component. Identity is the `id` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: IngredientType,
}

impl Ingredient {
    pub const fn new(id: &'static str, name: &'static str, kind: IngredientType) -> Self {
        Self { id, name, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_str_ignores_case() {
        assert_eq!("WRAP".parse::<IngredientType>().unwrap(), IngredientType::Wrap);
        assert_eq!("veggies".parse::<IngredientType>().unwrap(), IngredientType::Veggies);
        assert_eq!("Sauce".parse::<IngredientType>().unwrap(), IngredientType::Sauce);
    }

    #[test]
    fn test_type_from_str_rejects_unknown() {
        let err = "DESSERT".parse::<IngredientType>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_keys_are_lowercase_names() {
        for kind in IngredientType::ALL {
            assert_eq!(kind.key(), kind.as_str().to_lowercase());
        }
    }

    #[test]
    fn test_serializes_type_field_uppercase() {
        let value = serde_json::to_value(Ingredient::new("CHED", "Cheddar", IngredientType::Cheese))
            .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "CHED", "name": "Cheddar", "type": "CHEESE"})
        );
    }
}
