//! Per-currency prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use planbook_core::ValueObject;

use crate::currency::Currency;
use crate::error::{CatalogError, CatalogResult};

/// A price in one currency.
///
/// `value` is `None` when the catalog defines the currency without an amount.
/// That is a valid catalog state, distinct from a zero price; asking for the
/// value of such a price fails with [`CatalogError::CurrencyValueNull`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub currency: Currency,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Decimal>,
}

impl Price {
    pub fn new(currency: Currency, value: Decimal) -> Self {
        Self {
            currency,
            value: Some(value),
        }
    }

    /// A currency entry without an amount.
    pub fn undefined(currency: Currency) -> Self {
        Self {
            currency,
            value: None,
        }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn value(&self) -> CatalogResult<Decimal> {
        self.value
            .ok_or_else(|| CatalogError::currency_value_null(self.currency.clone()))
    }
}

impl ValueObject for Price {}

/// The same price expressed in several currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternationalPrice {
    pub prices: Vec<Price>,
}

impl InternationalPrice {
    pub fn new(prices: Vec<Price>) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &[Price] {
        &self.prices
    }
}

impl ValueObject for InternationalPrice {}
