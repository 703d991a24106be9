//! Model for the taco design page.
//!
//! [`prepare_design_context`] is called once per request and binds:
//! - one partition per ingredient category, under the category's lowercase key
//! - the session's order under `tacoOrder`, created on first access
//! - a fresh, empty taco under `taco`

use std::collections::BTreeMap;

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{list_ingredients, partition_by_type, Ingredient, IngredientType};
use crate::error::Result;
use crate::model::{SharedOrder, Taco, TacoOrder};
use crate::session::{session_attribute, SessionStore};

/// Session key of the accumulating order.
pub const TACO_ORDER_KEY: &str = "tacoOrder";

/// Model key of the taco being designed.
pub const TACO_KEY: &str = "taco";

const ERRORS_KEY: &str = "errors";

/// Everything the design view renders.
pub struct DesignContext {
    partitions: BTreeMap<IngredientType, Vec<Ingredient>>,
    taco_order: SharedOrder,
    taco: Taco,
    errors: Vec<String>,
}

impl DesignContext {
    /// Ingredients of one category, in catalog order.
    pub fn partition(&self, kind: IngredientType) -> &[Ingredient] {
        self.partitions
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The session's order. Same instance for every request of the session.
    pub fn taco_order(&self) -> &SharedOrder {
        &self.taco_order
    }

    pub fn taco(&self) -> &Taco {
        &self.taco
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Replace the blank taco with a rejected submission and its problems.
    pub fn with_rejected(mut self, taco: Taco, errors: Vec<String>) -> Self {
        self.taco = taco;
        self.errors = errors;
        self
    }
}

impl Serialize for DesignContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let order = self.taco_order.lock();
        let mut map = serializer.serialize_map(None)?;
        for kind in IngredientType::ALL {
            map.serialize_entry(kind.key(), self.partition(kind))?;
        }
        map.serialize_entry(TACO_ORDER_KEY, &*order)?;
        map.serialize_entry(TACO_KEY, &self.taco)?;
        if !self.errors.is_empty() {
            map.serialize_entry(ERRORS_KEY, &self.errors)?;
        }
        map.end()
    }
}

/// Build the design model for a request in `session_id`.
pub fn prepare_design_context(store: &dyn SessionStore, session_id: &str) -> Result<DesignContext> {
    let ingredients = list_ingredients();
    let partitions = IngredientType::ALL
        .into_iter()
        .map(|kind| (kind, partition_by_type(&ingredients, kind)))
        .collect();

    let taco_order = session_attribute(store, session_id, TACO_ORDER_KEY, || {
        Mutex::new(TacoOrder::new())
    })?;

    tracing::debug!(
        session = %session_id,
        tacos = taco_order.lock().taco_count(),
        "Prepared design context"
    );

    Ok(DesignContext {
        partitions,
        taco_order,
        taco: Taco::new(),
        errors: Vec::new(),
    })
}
