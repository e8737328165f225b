//! Seed set loaded into the store at startup.

use serde::{Deserialize, Serialize};

use rationboard_core::{DomainResult, ItemName, Quantity, Rate};

use crate::item::InventoryItem;

/// Externally supplied item definition (e.g. one entry of a JSON seed file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub stock: f64,
    pub consumption_rate: f64,
    #[serde(default)]
    pub threshold: f64,
}

impl SeedItem {
    pub fn new(name: impl Into<String>, stock: f64, consumption_rate: f64, threshold: f64) -> Self {
        Self {
            name: name.into(),
            stock,
            consumption_rate,
            threshold,
        }
    }

    /// Validate the raw values and build an item.
    pub fn into_item(self) -> DomainResult<InventoryItem> {
        Ok(InventoryItem::new(
            ItemName::new(&self.name)?,
            Quantity::new(self.stock)?,
            Rate::new(self.consumption_rate)?,
            Quantity::new(self.threshold)?,
        ))
    }
}

/// Built-in seed: staple goods with example stock, rate and threshold values.
pub fn default_seed() -> Vec<SeedItem> {
    vec![
        SeedItem::new("rice", 100.0, 0.5, 20.0),
        SeedItem::new("wheat", 150.0, 0.7, 30.0),
        SeedItem::new("pulses", 60.0, 0.6, 10.0),
        SeedItem::new("sugar", 40.0, 0.2, 10.0),
    ]
}
