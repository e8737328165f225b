use serde::Serialize;

use rationboard_core::{DomainError, DomainResult, ItemName, Quantity};
use rationboard_inventory::InventoryStore;

/// One row of a ration forecast.
///
/// `required_ration` and `sufficient` are derived for this call only; they are
/// never written back to the item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RationLine {
    pub item: ItemName,
    pub stock: Quantity,
    pub required_ration: Quantity,
    pub sufficient: bool,
}

/// Compare each item's stock with what `people` need over `days`.
///
/// Output follows store order. Fails with `InvalidArgument` when `days` or
/// `people` is not positive.
pub fn forecast_ration(store: &InventoryStore, days: i64, people: i64) -> DomainResult<Vec<RationLine>> {
    let days = DomainError::ensure_positive("days", days)?;
    let people = DomainError::ensure_positive("people", people)?;

    let lines: Vec<RationLine> = store
        .items()
        .iter()
        .map(|item| {
            let required_ration = item.consumption_rate().over(days, people);
            RationLine {
                item: item.name().clone(),
                stock: item.stock(),
                required_ration,
                sufficient: item.stock() >= required_ration,
            }
        })
        .collect();

    tracing::debug!(
        days,
        people,
        short = lines.iter().filter(|l| !l.sufficient).count(),
        "ration forecast computed"
    );
    Ok(lines)
}
