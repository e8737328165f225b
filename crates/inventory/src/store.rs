use std::collections::HashMap;

use chrono::{DateTime, Utc};

use rationboard_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::item::InventoryItem;
use crate::seed::{SeedItem, default_seed};

/// Key holding the day number in flat per-day stock records; no item may use it.
pub const DAY_KEY: &str = "day";

/// Authoritative item → stock mapping.
///
/// Items are keyed by name; insertion order is kept for display only.
/// The only mutation is [`InventoryStore::apply_consumption`].
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
    index: HashMap<ItemName, usize>,
}

impl InventoryStore {
    /// Build a store from items, rejecting duplicate and reserved names.
    pub fn new(items: impl IntoIterator<Item = InventoryItem>) -> DomainResult<Self> {
        let mut store = Self::default();
        for item in items {
            if item.name().as_str() == DAY_KEY {
                return Err(DomainError::invalid_argument(format!(
                    "item name `{DAY_KEY}` is reserved"
                )));
            }
            if store.index.contains_key(item.name()) {
                return Err(DomainError::conflict(format!(
                    "duplicate item name: {}",
                    item.name()
                )));
            }
            store.index.insert(item.name().clone(), store.items.len());
            store.items.push(item);
        }
        Ok(store)
    }

    /// Build a store from an externally supplied seed set.
    ///
    /// Every item is stamped as replenished at `at`.
    pub fn from_seed(seed: impl IntoIterator<Item = SeedItem>, at: DateTime<Utc>) -> DomainResult<Self> {
        let items = seed
            .into_iter()
            .map(|s| s.into_item().map(|item| item.with_last_replenished(at)))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(items)
    }

    /// Store holding the built-in seed set.
    pub fn seeded(at: DateTime<Utc>) -> DomainResult<Self> {
        Self::from_seed(default_seed(), at)
    }

    /// Snapshot of all items in store order.
    ///
    /// The returned items are copies; they do not follow later mutations.
    pub fn get_all(&self) -> Vec<InventoryItem> {
        self.items.clone()
    }

    /// Borrowing view of all items in store order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> DomainResult<&InventoryItem> {
        self.index
            .get(name)
            .map(|&i| &self.items[i])
            .ok_or_else(|| DomainError::not_found(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &ItemName> {
        self.items.iter().map(InventoryItem::name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtract `amount` from the named item's stock, clamped at zero.
    ///
    /// Returns the resulting stock. Only the targeted item changes.
    pub fn apply_consumption(&mut self, name: &str, amount: Quantity) -> DomainResult<Quantity> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| DomainError::not_found(name))?;
        let item = &mut self.items[idx];
        let before = item.stock();
        let after = item.consume(amount);
        tracing::trace!(item = %name, %before, %amount, %after, "stock consumed");
        Ok(after)
    }
}
