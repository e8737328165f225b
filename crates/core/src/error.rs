//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of the inventory computations.
/// A zero consumption rate is not an error: it is reported as "never depletes".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was outside its allowed range (e.g. `days <= 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced item does not exist in the store.
    #[error("item not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. two seed items sharing a name).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Reject non-positive counts such as `days` or `people`.
    pub fn ensure_positive(field: &str, value: i64) -> DomainResult<u32> {
        if value <= 0 {
            return Err(Self::invalid_argument(format!(
                "{field} must be positive (got {value})"
            )));
        }
        u32::try_from(value)
            .map_err(|_| Self::invalid_argument(format!("{field} is too large (got {value})")))
    }
}
