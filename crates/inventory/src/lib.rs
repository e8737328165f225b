//! Inventory state: the authoritative item → stock mapping.
//!
//! This crate contains the inventory data model and its single mutation path,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod seed;
pub mod shared;
pub mod store;

pub use item::InventoryItem;
pub use seed::{SeedItem, default_seed};
pub use shared::SharedInventory;
pub use store::{DAY_KEY, InventoryStore};
