use chrono::{DateTime, Utc};

use rationboard_core::DomainResult;
use rationboard_forecast::{
    ConsumptionSimulation, DepletionLine, RationLine, SimulationOutcome, forecast_depletion, forecast_ration,
};
use rationboard_inventory::{InventoryItem, SharedInventory};

/// Service layer shared by all handlers.
///
/// Read-only forecasts run under the read lock; a simulation holds the write
/// lock for its entire run.
#[derive(Debug, Clone)]
pub struct AppServices {
    inventory: SharedInventory,
}

impl AppServices {
    pub fn new(inventory: SharedInventory) -> Self {
        Self { inventory }
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.inventory.read(|store| store.get_all())
    }

    pub fn forecast_ration(&self, days: i64, people: i64) -> DomainResult<Vec<RationLine>> {
        self.inventory.read(|store| forecast_ration(store, days, people))
    }

    pub fn simulate(&self, people: i64, days: i64) -> DomainResult<SimulationOutcome> {
        // Validate before taking the write lock.
        let simulation = ConsumptionSimulation::new(people, days)?;
        self.inventory.write(|store| simulation.run(store))
    }

    pub fn forecast_depletion(&self, reference_time: DateTime<Utc>) -> DomainResult<Vec<DepletionLine>> {
        self.inventory.read(|store| forecast_depletion(store, reference_time))
    }
}
