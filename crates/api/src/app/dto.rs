use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------
//
// Every parameter is optional: a request missing one has not been triggered
// yet and yields no result (204), which is distinct from an invalid value.

#[derive(Debug, Default, Deserialize)]
pub struct RationQuery {
    pub days: Option<i64>,
    pub people: Option<i64>,
}

impl RationQuery {
    /// `(days, people)` once both are present.
    pub fn params(&self) -> Option<(i64, i64)> {
        Some((self.days?, self.people?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SimulateRequest {
    pub people: Option<i64>,
    pub days: Option<i64>,
}

impl SimulateRequest {
    /// `(people, days)` once both are present.
    pub fn params(&self) -> Option<(i64, i64)> {
        Some((self.people?, self.days?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DepletionQuery {
    /// Reference date (midnight UTC); defaults to now.
    pub as_of: Option<NaiveDate>,
}

impl DepletionQuery {
    pub fn reference_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.as_of
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .unwrap_or(now)
    }
}
