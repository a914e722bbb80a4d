//! Catalog error model.

use chrono::{DateTime, Utc};
use thiserror::Error;

use planbook_core::DomainError;

use crate::currency::Currency;

/// Result type used by catalog queries.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures surfaced by the catalog accessor.
///
/// Catalog state is deterministic for a given date, so none of these are
/// retryable without an external change to the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A price was requested for a currency that has no value defined.
    #[error("price for currency {currency} has no value")]
    CurrencyValueNull { currency: Currency },

    /// The catalog could not resolve state for the requested date.
    #[error("catalog api error: {0}")]
    CatalogApi(String),

    /// A catalog definition could not be read or parsed.
    #[error("failed to load catalog: {0}")]
    Load(String),

    /// A catalog definition is structurally invalid.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CatalogError {
    pub fn currency_value_null(currency: Currency) -> Self {
        Self::CurrencyValueNull { currency }
    }

    pub fn no_version_effective_at(requested: DateTime<Utc>) -> Self {
        Self::CatalogApi(format!(
            "no catalog version effective at {}",
            requested.to_rfc3339()
        ))
    }

    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }
}
