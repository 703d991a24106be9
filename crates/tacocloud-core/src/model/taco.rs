use serde::Serialize;

use crate::catalog::{find_ingredient, Ingredient};
use crate::error::{Error, Result};

/// Minimum length of a taco name.
const MIN_NAME_LEN: usize = 5;

/// A named selection of ingredients.
///
/// Ingredients keep the order they were chosen in; the model does not
/// reject duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Taco {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Taco {
    /// An empty taco: no name, no ingredients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a taco from submitted form values.
    ///
    /// Ids found in the catalog are kept in selection order. Every unknown id
    /// is reported in the returned problem list instead of failing the whole
    /// submission.
    pub fn from_submission<I, S>(name: impl Into<String>, ingredient_ids: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut taco = Self {
            name: name.into(),
            ingredients: Vec::new(),
        };
        let mut problems = Vec::new();

        for id in ingredient_ids {
            match find_ingredient(id.as_ref()) {
                Ok(ingredient) => taco.ingredients.push(ingredient),
                Err(err) => problems.push(err.to_string()),
            }
        }

        (taco, problems)
    }

    /// Check the taco is ready to be added to an order.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            problems.push(format!(
                "Name must be at least {MIN_NAME_LEN} characters long"
            ));
        }
        if self.ingredients.is_empty() {
            problems.push("You must choose at least 1 ingredient".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidTaco(problems))
        }
    }
}
