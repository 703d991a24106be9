//! Taco and order values.

mod order;
mod taco;

pub use order::{SharedOrder, TacoOrder};
pub use taco::Taco;
