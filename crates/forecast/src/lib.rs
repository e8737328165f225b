//! `rationboard-forecast`
//!
//! **Responsibility:** the three inventory computations.
//!
//! - [`ration`]: does current stock cover a horizon for a population? (read-only)
//! - [`simulation`]: day-by-day depletion that **mutates** the store.
//! - [`depletion`]: calendar date each item runs out. (read-only)
//!
//! Simulation results compound: running it twice continues from where the
//! first run left the stock.

pub mod depletion;
pub mod ration;
pub mod simulation;

pub use depletion::{DepletionDate, DepletionLine, days_until_depleted, forecast_depletion};
pub use ration::{RationLine, forecast_ration};
pub use simulation::{
    ConsumptionSimulation, DayRecord, MAX_SIMULATION_DAYS, SimulationOutcome, StockLevel, simulate,
};
