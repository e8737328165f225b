//! `rationboard-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, item identity, and the non-negative quantities every
//! inventory computation works with.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ItemName;
pub use value_object::{Quantity, Rate};
