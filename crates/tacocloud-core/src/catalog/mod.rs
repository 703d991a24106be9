//! The ingredient catalog.
//!
//! The catalog is a fixed table compiled into the binary. Partitions are
//! recomputed on demand; with ten rows there is nothing worth caching.

mod ingredient;

pub use ingredient::{Ingredient, IngredientType};

use crate::error::{Error, Result};

const INGREDIENTS: [Ingredient; 10] = [
    Ingredient::new("FLTO", "Flour Tortilla", IngredientType::Wrap),
    Ingredient::new("COTO", "Corn Tortilla", IngredientType::Wrap),
    Ingredient::new("GRBF", "Ground Beef", IngredientType::Protein),
    Ingredient::new("CARN", "Carnitas", IngredientType::Protein),
    Ingredient::new("TMTO", "Diced Tomatoes", IngredientType::Veggies),
    Ingredient::new("LETC", "Lettuce", IngredientType::Veggies),
    Ingredient::new("CHED", "Cheddar", IngredientType::Cheese),
    Ingredient::new("JACK", "Monterrey Jack", IngredientType::Cheese),
    Ingredient::new("SLSA", "Salsa", IngredientType::Sauce),
    Ingredient::new("SRCR", "Sour Cream", IngredientType::Sauce),
];

/// Return the full catalog in table order.
pub fn list_ingredients() -> Vec<Ingredient> {
    INGREDIENTS.to_vec()
}

/// Keep the ingredients of one category, preserving input order.
pub fn partition_by_type(ingredients: &[Ingredient], kind: IngredientType) -> Vec<Ingredient> {
    ingredients
        .iter()
        .filter(|ingredient| ingredient.kind == kind)
        .copied()
        .collect()
}

/// Like [`partition_by_type`], with the category given by name.
///
/// Fails with [`Error::InvalidArgument`] if `name` is not a category.
pub fn partition_by_name(ingredients: &[Ingredient], name: &str) -> Result<Vec<Ingredient>> {
    let kind = name.parse::<IngredientType>()?;
    Ok(partition_by_type(ingredients, kind))
}

/// Look up an ingredient by its id code.
pub fn find_ingredient(id: &str) -> Result<Ingredient> {
    INGREDIENTS
        .iter()
        .find(|ingredient| ingredient.id == id)
        .copied()
        .ok_or_else(|| Error::InvalidArgument(format!("unknown ingredient id: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(&str, &str, IngredientType); 10] = [
        ("FLTO", "Flour Tortilla", IngredientType::Wrap),
        ("COTO", "Corn Tortilla", IngredientType::Wrap),
        ("GRBF", "Ground Beef", IngredientType::Protein),
        ("CARN", "Carnitas", IngredientType::Protein),
        ("TMTO", "Diced Tomatoes", IngredientType::Veggies),
        ("LETC", "Lettuce", IngredientType::Veggies),
        ("CHED", "Cheddar", IngredientType::Cheese),
        ("JACK", "Monterrey Jack", IngredientType::Cheese),
        ("SLSA", "Salsa", IngredientType::Sauce),
        ("SRCR", "Sour Cream", IngredientType::Sauce),
    ];

    #[test]
    fn test_list_ingredients_matches_table() {
        let ingredients = list_ingredients();
        assert_eq!(ingredients.len(), 10);
        for (ingredient, (id, name, kind)) in ingredients.iter().zip(EXPECTED) {
            assert_eq!(ingredient.id, id);
            assert_eq!(ingredient.name, name);
            assert_eq!(ingredient.kind, kind);
        }
    }

    #[test]
    fn test_list_ingredients_is_idempotent() {
        let mut first = list_ingredients();
        first.clear();
        assert_eq!(list_ingredients(), list_ingredients());
        assert_eq!(list_ingredients().len(), 10);
    }

    #[test]
    fn test_partition_matches_table_rows() {
        let ingredients = list_ingredients();
        for kind in IngredientType::ALL {
            let ids: Vec<_> = partition_by_type(&ingredients, kind)
                .into_iter()
                .map(|ingredient| ingredient.id)
                .collect();
            let expected: Vec<_> = EXPECTED
                .iter()
                .filter(|(_, _, k)| *k == kind)
                .map(|(id, _, _)| *id)
                .collect();
            assert_eq!(ids, expected, "partition for {kind}");
        }
    }

    #[test]
    fn test_partitions_cover_catalog_in_order() {
        let ingredients = list_ingredients();
        let concatenated: Vec<_> = IngredientType::ALL
            .into_iter()
            .flat_map(|kind| partition_by_type(&ingredients, kind))
            .collect();
        assert_eq!(concatenated, ingredients);
    }

    #[test]
    fn test_every_type_is_stocked() {
        let ingredients = list_ingredients();
        for kind in IngredientType::ALL {
            assert!(!partition_by_type(&ingredients, kind).is_empty());
        }
    }

    #[test]
    fn test_partition_of_arbitrary_input() {
        let input = [
            Ingredient::new("SLSA", "Salsa", IngredientType::Sauce),
            Ingredient::new("CARN", "Carnitas", IngredientType::Protein),
            Ingredient::new("SLSA", "Salsa", IngredientType::Sauce),
        ];
        assert_eq!(partition_by_type(&input, IngredientType::Sauce).len(), 2);
        assert!(partition_by_type(&input, IngredientType::Wrap).is_empty());
        assert!(partition_by_type(&[], IngredientType::Cheese).is_empty());
    }

    #[test]
    fn test_partition_by_name() {
        let ingredients = list_ingredients();
        let cheese = partition_by_name(&ingredients, "cheese").unwrap();
        assert_eq!(cheese[0].id, "CHED");
        assert_eq!(cheese[1].id, "JACK");

        let err = partition_by_name(&ingredients, "DRINK").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_find_ingredient() {
        assert_eq!(find_ingredient("JACK").unwrap().name, "Monterrey Jack");
        assert!(matches!(
            find_ingredient("NOPE"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
