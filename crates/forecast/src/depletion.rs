use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use rationboard_core::{DomainError, DomainResult, ItemName, Quantity, Rate};
use rationboard_inventory::InventoryStore;

/// Quotients this close below a whole day count to that day (absorbs float noise, e.g. 60 / 0.6).
const WHOLE_DAY_TOLERANCE: f64 = 1e-9;

/// Projected calendar date on which an item's stock reaches zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepletionDate {
    On(NaiveDate),
    /// Zero consumption rate: the item never runs out.
    Never,
}

impl core::fmt::Display for DepletionDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DepletionDate::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DepletionDate::Never => f.write_str("never"),
        }
    }
}

impl Serialize for DepletionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepletionLine {
    pub item: ItemName,
    pub depletion_date: DepletionDate,
    /// Whole days until depletion (rounded up); `None` when it never depletes.
    pub days_remaining: Option<u64>,
}

/// Fractional days until `stock` runs out at `rate`; `None` when `rate` is zero.
pub fn days_until_depleted(stock: Quantity, rate: Rate) -> Option<f64> {
    if rate.is_zero() {
        return None;
    }
    Some(stock.value() / rate.value())
}

fn whole_days(days: f64) -> DomainResult<u64> {
    let rounded = (days - WHOLE_DAY_TOLERANCE).ceil().max(0.0);
    if rounded >= u64::MAX as f64 {
        return Err(DomainError::invalid_argument(format!(
            "depletion horizon of {days} days is out of range"
        )));
    }
    Ok(rounded as u64)
}

/// Project each item's depletion date from `reference_time`.
///
/// Days are counted from the calendar date of `reference_time`; its time of day
/// is discarded. A partial day rounds up to the next whole day. Output follows
/// store order.
pub fn forecast_depletion(
    store: &InventoryStore,
    reference_time: DateTime<Utc>,
) -> DomainResult<Vec<DepletionLine>> {
    let start = reference_time.date_naive();

    let lines = store
        .items()
        .iter()
        .map(|item| -> DomainResult<DepletionLine> {
            let Some(days) = days_until_depleted(item.stock(), item.consumption_rate()) else {
                return Ok(DepletionLine {
                    item: item.name().clone(),
                    depletion_date: DepletionDate::Never,
                    days_remaining: None,
                });
            };
            let days = whole_days(days)?;
            let date = start.checked_add_days(Days::new(days)).ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "depletion date for {} is beyond the supported calendar",
                    item.name()
                ))
            })?;
            Ok(DepletionLine {
                item: item.name().clone(),
                depletion_date: DepletionDate::On(date),
                days_remaining: Some(days),
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    tracing::debug!(%reference_time, items = lines.len(), "depletion forecast computed");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rationboard_inventory::SeedItem;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_of(seed: Vec<SeedItem>) -> InventoryStore {
        InventoryStore::from_seed(seed, test_time()).unwrap()
    }

    #[test]
    fn sixty_at_point_six_lasts_one_hundred_days() {
        let store = store_of(vec![SeedItem::new("pulses", 60.0, 0.6, 10.0)]);
        let lines = forecast_depletion(&store, test_time()).unwrap();
        assert_eq!(lines[0].days_remaining, Some(100));
        assert_eq!(lines[0].depletion_date, DepletionDate::On(date(2024, 4, 10)));
    }

    #[test]
    fn time_of_day_is_discarded() {
        let store = store_of(vec![SeedItem::new("oil", 10.0, 3.0, 0.0)]);
        let late = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(
            forecast_depletion(&store, late).unwrap(),
            forecast_depletion(&store, test_time()).unwrap()
        );
    }

    #[test]
    fn zero_rate_never_depletes() {
        let store = store_of(vec![SeedItem::new("water", 10.0, 0.0, 0.0)]);
        let lines = forecast_depletion(&store, test_time()).unwrap();
        assert_eq!(lines[0].depletion_date, DepletionDate::Never);
        assert_eq!(lines[0].days_remaining, None);
        assert_eq!(serde_json::to_value(&lines[0]).unwrap()["depletion_date"], "never");
    }

    #[test]
    fn partial_days_round_up() {
        let store = store_of(vec![SeedItem::new("oil", 10.0, 3.0, 0.0)]);
        let lines = forecast_depletion(&store, test_time()).unwrap();
        assert_eq!(lines[0].days_remaining, Some(4));
        assert_eq!(lines[0].depletion_date.to_string(), "2024-01-05");
    }

    #[test]
    fn empty_stock_depletes_today() {
        let store = store_of(vec![SeedItem::new("salt", 0.0, 1.0, 0.0)]);
        let lines = forecast_depletion(&store, test_time()).unwrap();
        assert_eq!(lines[0].depletion_date, DepletionDate::On(date(2024, 1, 1)));
    }

    #[test]
    fn seeded_store_in_order() {
        let store = InventoryStore::seeded(test_time()).unwrap();
        let lines = forecast_depletion(&store, test_time()).unwrap();
        let days: Vec<_> = lines.iter().map(|l| (l.item.as_str(), l.days_remaining)).collect();
        assert_eq!(
            days,
            vec![
                ("rice", Some(200)),
                ("wheat", Some(215)),
                ("pulses", Some(100)),
                ("sugar", Some(200)),
            ]
        );
    }

    #[test]
    fn unrepresentable_dates_are_rejected() {
        let store = store_of(vec![SeedItem::new("dust", 1e300, 1e-300, 0.0)]);
        assert!(matches!(
            forecast_depletion(&store, test_time()),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn repeatable_and_read_only() {
        let store = InventoryStore::seeded(test_time()).unwrap();
        let before = store.get_all();
        let first = forecast_depletion(&store, test_time()).unwrap();
        let second = forecast_depletion(&store, test_time()).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.get_all(), before);
    }
}
