//! Usage-based pricing: usages → tiers → tiered blocks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::plan::BillingPeriod;
use crate::price::InternationalPrice;

/// Unit of consumption a block is priced in (e.g. `cell-phone-minutes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit {
    pub name: String,
}

impl Unit {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A block of consumption: `size` units at `price`, up to `max` blocks.
///
/// `size` and `max` keep the scale they were defined with, so `1.0` stays
/// `1.0` when rendered. A `max` of `-1` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredBlock {
    pub unit: Unit,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub size: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub max: Decimal,
    pub price: InternationalPrice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    #[serde(default)]
    pub blocks: Vec<TieredBlock>,
}

/// Usage section of a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub name: String,
    pub billing_period: BillingPeriod,
    #[serde(default)]
    pub tiers: Vec<Tier>,
}
