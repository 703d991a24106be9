//! Taco Cloud Core - ingredient catalog, order model, and session storage.
//!
//! This crate holds everything the design page needs that is not HTTP:
//! - The fixed ingredient catalog and its partition by category
//! - `Taco` and `TacoOrder` values
//! - A `SessionStore` capability with an in-memory implementation
//! - The design rendering context built per request

pub mod catalog;
pub mod design;
pub mod error;
pub mod model;
pub mod session;

pub use catalog::{
    find_ingredient, list_ingredients, partition_by_name, partition_by_type, Ingredient,
    IngredientType,
};
pub use design::{prepare_design_context, DesignContext, TACO_KEY, TACO_ORDER_KEY};
pub use error::{Error, Result};
pub use model::{SharedOrder, Taco, TacoOrder};
pub use session::{session_attribute, MemorySessionStore, SessionStore, SessionValue};
