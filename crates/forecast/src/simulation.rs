use serde::Serialize;
use serde::ser::SerializeMap;

use rationboard_core::{DomainError, DomainResult, ItemName, Quantity};
use rationboard_inventory::{DAY_KEY, InventoryStore};

/// Longest horizon a single simulation may cover (ten years of days).
pub const MAX_SIMULATION_DAYS: u32 = 3_650;

/// Stock of one item at the end of a simulated day.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLevel {
    pub item: ItemName,
    pub stock: Quantity,
}

/// Resulting stock of every item after one simulated day (days start at 1).
///
/// Serializes flat, in store order: `{"day": 1, "rice": 95.0, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub day: u32,
    pub stocks: Vec<StockLevel>,
}

impl DayRecord {
    pub fn stock_of(&self, name: &str) -> Option<Quantity> {
        self.stocks
            .iter()
            .find(|s| s.item.as_str() == name)
            .map(|s| s.stock)
    }
}

impl Serialize for DayRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stocks.len() + 1))?;
        map.serialize_entry(DAY_KEY, &self.day)?;
        for level in &self.stocks {
            map.serialize_entry(level.item.as_str(), &level.stock)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub records: Vec<DayRecord>,
    /// True when the run stopped before `days` because an item hit zero.
    pub depleted_early: bool,
}

/// Day-stepping consumption run for a fixed population.
///
/// Each day every item loses `rate * people`, clamped to its remaining stock.
/// The run stops after the first day on which any item's stock is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumptionSimulation {
    people: u32,
    days: u32,
}

impl ConsumptionSimulation {
    pub fn new(people: i64, days: i64) -> DomainResult<Self> {
        let people = DomainError::ensure_positive("people", people)?;
        let days = DomainError::ensure_positive("days", days)?;
        if days > MAX_SIMULATION_DAYS {
            return Err(DomainError::invalid_argument(format!(
                "days cannot exceed {MAX_SIMULATION_DAYS} (got {days})"
            )));
        }
        Ok(Self { people, days })
    }

    /// Run against `store`, mutating its stock in place.
    pub fn run(&self, store: &mut InventoryStore) -> DomainResult<SimulationOutcome> {
        // Rates never change during a run.
        let plan: Vec<(ItemName, Quantity)> = store
            .items()
            .iter()
            .map(|item| (item.name().clone(), item.consumption_rate().daily(self.people)))
            .collect();

        let mut records = Vec::new();
        let mut depleted_early = false;

        for day in 1..=self.days {
            let mut stocks = Vec::with_capacity(plan.len());
            let mut any_depleted = false;

            for (name, daily) in &plan {
                let current = store.get(name.as_str())?.stock();
                let adjusted = daily.min(current);
                let stock = store.apply_consumption(name.as_str(), adjusted)?;
                any_depleted |= stock.is_zero();
                stocks.push(StockLevel {
                    item: name.clone(),
                    stock,
                });
            }

            records.push(DayRecord { day, stocks });

            if any_depleted {
                depleted_early = day < self.days;
                tracing::info!(day, requested_days = self.days, "simulation stopped: item depleted");
                break;
            }
        }

        tracing::debug!(
            people = self.people,
            days = self.days,
            simulated = records.len(),
            "consumption simulated"
        );
        Ok(SimulationOutcome {
            records,
            depleted_early,
        })
    }
}

/// Simulate `people` consuming for up to `days`, returning one record per day.
///
/// Permanently mutates `store`; repeated calls compound.
pub fn simulate(store: &mut InventoryStore, people: i64, days: i64) -> DomainResult<Vec<DayRecord>> {
    let outcome = ConsumptionSimulation::new(people, days)?.run(store)?;
    Ok(outcome.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use rationboard_inventory::SeedItem;

    fn test_store() -> InventoryStore {
        InventoryStore::seeded(Utc::now()).unwrap()
    }

    fn store_of(seed: Vec<SeedItem>) -> InventoryStore {
        InventoryStore::from_seed(seed, Utc::now()).unwrap()
    }

    #[test]
    fn week_for_ten_people_leaves_sixty_five_rice() {
        let mut store = test_store();
        let records = simulate(&mut store, 10, 7).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].day, 1);
        assert_eq!(records[6].day, 7);
        assert_eq!(records[6].stock_of("rice").unwrap().value(), 65.0);
        assert_eq!(store.get("rice").unwrap().stock().value(), 65.0);
    }

    #[test]
    fn repeated_runs_compound() {
        let mut store = test_store();
        simulate(&mut store, 10, 2).unwrap();
        let records = simulate(&mut store, 10, 2).unwrap();
        // rice: 100 - 4 * 5
        assert_eq!(records[1].stock_of("rice").unwrap().value(), 80.0);
    }

    #[test]
    fn stops_on_first_depleted_day() {
        let mut store = store_of(vec![
            SeedItem::new("rice", 100.0, 0.5, 0.0),
            SeedItem::new("sugar", 12.0, 0.2, 0.0),
        ]);
        // sugar: 2/day for 10 people -> 12 lasts exactly 6 days
        let outcome = ConsumptionSimulation::new(10, 30).unwrap().run(&mut store).unwrap();
        assert_eq!(outcome.records.len(), 6);
        assert!(outcome.depleted_early);
        let last = outcome.records.last().unwrap();
        assert!(last.stock_of("sugar").unwrap().is_zero());
        assert_eq!(last.stock_of("rice").unwrap().value(), 70.0);
    }

    #[test]
    fn consumption_is_clamped_to_remaining_stock() {
        let mut store = store_of(vec![SeedItem::new("salt", 3.0, 1.0, 0.0)]);
        let records = simulate(&mut store, 10, 5).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stock_of("salt"), Some(Quantity::ZERO));
    }

    #[test]
    fn depleting_on_last_day_is_not_early() {
        let mut store = store_of(vec![SeedItem::new("salt", 10.0, 1.0, 0.0)]);
        let outcome = ConsumptionSimulation::new(5, 2).unwrap().run(&mut store).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert!(!outcome.depleted_early);
    }

    #[test]
    fn non_positive_arguments_are_rejected_without_mutation() {
        let mut store = test_store();
        let before = store.get_all();
        for (people, days) in [(0, 7), (10, 0), (-2, 7), (10, -1)] {
            assert!(matches!(
                simulate(&mut store, people, days),
                Err(DomainError::InvalidArgument(_))
            ));
        }
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn horizon_is_capped() {
        assert!(ConsumptionSimulation::new(1, i64::from(MAX_SIMULATION_DAYS)).is_ok());
        let err = ConsumptionSimulation::new(1, i64::from(MAX_SIMULATION_DAYS) + 1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert!(ConsumptionSimulation::new(1, i64::from(u32::MAX)).is_err());
    }

    #[test]
    fn never_depleting_store_stops_at_the_cap() {
        let mut store = store_of(vec![SeedItem::new("water", 10.0, 0.0, 0.0)]);
        let records = simulate(&mut store, 1, i64::from(MAX_SIMULATION_DAYS)).unwrap();
        assert_eq!(records.len(), MAX_SIMULATION_DAYS as usize);
    }

    #[test]
    fn day_record_serializes_flat_in_store_order() {
        let mut store = test_store();
        let records = simulate(&mut store, 10, 1).unwrap();
        let json = serde_json::to_string(&records[0]).unwrap();
        assert_eq!(
            json,
            r#"{"day":1,"rice":95.0,"wheat":143.0,"pulses":54.0,"sugar":38.0}"#
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: zero-rate items keep their stock for any run length.
        #[test]
        fn zero_rate_items_never_change(
            stock in 1.0f64..1_000.0,
            people in 1i64..100,
            days in 1i64..200,
        ) {
            let mut store = store_of(vec![SeedItem::new("water", stock, 0.0, 0.0)]);
            let records = simulate(&mut store, people, days).unwrap();
            prop_assert_eq!(records.len() as i64, days);
            for record in &records {
                prop_assert_eq!(record.stock_of("water").unwrap().value(), stock);
            }
        }

        /// Property: with no depletion there are exactly `days` records and
        /// stock never increases from one record to the next.
        #[test]
        fn full_runs_are_monotone(people in 1i64..10, days in 1i64..10) {
            // At most 9 people for 9 days: every seeded item's draw stays below its stock.
            let mut store = test_store();
            let records = simulate(&mut store, people, days).unwrap();
            prop_assert_eq!(records.len() as i64, days);
            for pair in records.windows(2) {
                for (prev, next) in pair[0].stocks.iter().zip(&pair[1].stocks) {
                    prop_assert!(next.stock <= prev.stock);
                }
            }
        }

        /// Property: the run ends on the first day an item reaches zero.
        #[test]
        fn terminates_on_first_zero(
            stocks in prop::collection::vec(1.0f64..50.0, 1..5),
            people in 1i64..20,
            days in 1i64..100,
        ) {
            let seed = stocks
                .iter()
                .enumerate()
                .map(|(i, s)| SeedItem::new(format!("item{i}"), *s, 0.3, 0.0))
                .collect();
            let mut store = store_of(seed);
            let records = simulate(&mut store, people, days).unwrap();
            prop_assert!(records.len() as i64 <= days);
            let first_zero = records
                .iter()
                .position(|r| r.stocks.iter().any(|s| s.stock.is_zero()));
            match first_zero {
                Some(idx) => prop_assert_eq!(idx + 1, records.len()),
                None => prop_assert_eq!(records.len() as i64, days),
            }
            for record in &records {
                prop_assert!(record.stocks.iter().all(|s| s.stock.value() >= 0.0));
            }
        }
    }
}
