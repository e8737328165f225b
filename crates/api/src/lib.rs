//! HTTP API: hosts the inventory computations behind a small JSON interface.
//!
//! The computations themselves live in `rationboard-forecast`; this crate only
//! collects parameters, serializes access to the shared store, and maps results.

pub mod app;
pub mod config;
