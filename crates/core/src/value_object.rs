//! Value objects: immutable, compared by value.
//!
//! Stock levels and consumption rates are plain numbers with a domain
//! constraint attached (finite, never negative). Wrapping them keeps that
//! constraint in one place instead of re-checking it in every computation.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

fn ensure_non_negative(field: &str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::invalid_argument(format!(
            "{field} must be finite (got {value})"
        )));
    }
    if value < 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    // Normalize -0.0 so equality and display stay boring.
    Ok(value + 0.0)
}

/// A non-negative, finite amount of an item (stock, ration, daily usage).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        ensure_non_negative("quantity", value).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Subtract `amount`, clamping at zero.
    pub fn saturating_sub(self, amount: Quantity) -> Quantity {
        Quantity((self.0 - amount.0).max(0.0))
    }

    pub fn min(self, other: Quantity) -> Quantity {
        if other.0 < self.0 { other } else { self }
    }
}

impl TryFrom<f64> for Quantity {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for f64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Consumption rate: quantity consumed per person per day.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rate(f64);

impl Rate {
    pub fn new(value: f64) -> DomainResult<Self> {
        ensure_non_negative("consumption_rate", value).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Amount consumed in one day by `people`.
    pub fn daily(self, people: u32) -> Quantity {
        Quantity(self.0 * f64::from(people))
    }

    /// Amount consumed over `days` by `people`.
    pub fn over(self, days: u32, people: u32) -> Quantity {
        Quantity(self.0 * f64::from(days) * f64::from(people))
    }
}

impl TryFrom<f64> for Rate {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for f64 {
    fn from(value: Rate) -> Self {
        value.0
    }
}
