use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use super::Taco;

/// An order shared by every request of one session.
pub type SharedOrder = Arc<Mutex<TacoOrder>>;

/// An accumulating order: delivery and payment details plus the tacos designed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TacoOrder {
    pub delivery_name: Option<String>,
    pub delivery_street: Option<String>,
    pub delivery_city: Option<String>,
    pub delivery_state: Option<String>,
    pub delivery_zip: Option<String>,
    pub cc_number: Option<String>,
    pub cc_expiration: Option<String>,
    pub cc_cvv: Option<String>,
    pub tacos: Vec<Taco>,
}

impl TacoOrder {
    /// An empty order: no tacos, delivery and payment unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_taco(&mut self, taco: Taco) {
        self.tacos.push(taco);
    }

    pub fn taco_count(&self) -> usize {
        self.tacos.len()
    }
}
