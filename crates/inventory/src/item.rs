use chrono::{DateTime, Utc};
use serde::Serialize;

use rationboard_core::{ItemName, Quantity, Rate};

/// A tracked inventory good (e.g. rice) with its current stock and usage rate.
///
/// Stock only changes through [`crate::InventoryStore::apply_consumption`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    name: ItemName,
    stock: Quantity,
    consumption_rate: Rate,
    threshold: Quantity,
    last_replenished: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn new(name: ItemName, stock: Quantity, consumption_rate: Rate, threshold: Quantity) -> Self {
        Self {
            name,
            stock,
            consumption_rate,
            threshold,
            last_replenished: None,
        }
    }

    pub fn with_last_replenished(mut self, at: DateTime<Utc>) -> Self {
        self.last_replenished = Some(at);
        self
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn stock(&self) -> Quantity {
        self.stock
    }

    /// Quantity per person per day.
    pub fn consumption_rate(&self) -> Rate {
        self.consumption_rate
    }

    pub fn threshold(&self) -> Quantity {
        self.threshold
    }

    pub fn last_replenished(&self) -> Option<DateTime<Utc>> {
        self.last_replenished
    }

    /// Informational reorder flag; no computation acts on it.
    pub fn below_threshold(&self) -> bool {
        self.stock <= self.threshold
    }

    /// Subtract `amount` from stock (clamped at zero) and return the new stock.
    pub(crate) fn consume(&mut self, amount: Quantity) -> Quantity {
        self.stock = self.stock.saturating_sub(amount);
        self.stock
    }
}
