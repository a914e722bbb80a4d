//! Catalog document: the catalog as published at a requested date.
//!
//! The document nests products → plans → phases → (prices, usages → tiers →
//! blocks → prices) and lists price lists by plan name. Field names are the
//! wire contract of the catalog endpoint.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use planbook_catalog::{
    BillingPeriod, CatalogApi, CatalogError, CatalogResult, Currency, Duration, InternationalPrice,
    Plan, PlanPhase, Price, PriceList, Product, Tier, TieredBlock, TimeUnit, Usage,
};

/// The catalog as of one requested date.
///
/// Built once per request by [`CatalogProjector`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    name: String,
    effective_date: DateTime<Utc>,
    currencies: Vec<Currency>,
    products: Vec<ProductEntry>,
    price_lists: Vec<PriceListEntry>,
}

impl CatalogDocument {
    /// Project `catalog` as of `requested_date`.
    pub fn project<C>(catalog: &C, requested_date: DateTime<Utc>) -> CatalogResult<Self>
    where
        C: CatalogApi + ?Sized,
    {
        CatalogProjector::new(catalog).project(requested_date)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effective_date(&self) -> DateTime<Utc> {
        self.effective_date
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Products in first-seen order while scanning plans.
    pub fn products(&self) -> &[ProductEntry] {
        &self.products
    }

    pub fn price_lists(&self) -> &[PriceListEntry] {
        &self.price_lists
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub category: String,
    pub name: String,
    pub included: Vec<String>,
    pub available: Vec<String>,
    pub plans: Vec<PlanEntry>,
}

impl ProductEntry {
    fn new(product: &Product) -> Self {
        Self {
            category: product.category.to_string(),
            name: product.name.clone(),
            included: product.included.clone(),
            available: product.available.clone(),
            plans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub name: String,
    pub recurring_billing_period: BillingPeriod,
    pub phases: Vec<PhaseEntry>,
}

impl PlanEntry {
    fn try_new(plan: &Plan) -> CatalogResult<Self> {
        Ok(Self {
            name: plan.name().to_string(),
            recurring_billing_period: plan.recurring_billing_period(),
            phases: collect_entries(plan.phases(), PhaseEntry::try_new)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseEntry {
    pub phase_type: String,
    pub recurring_prices: Vec<PriceEntry>,
    pub fixed_prices: Vec<PriceEntry>,
    pub duration: DurationEntry,
    pub usages: Vec<UsageEntry>,
}

impl PhaseEntry {
    fn try_new(phase: &PlanPhase) -> CatalogResult<Self> {
        Ok(Self {
            phase_type: phase.phase_type.to_string(),
            recurring_prices: price_entries(phase.recurring_price())?,
            fixed_prices: price_entries(phase.fixed_price())?,
            duration: DurationEntry::from(phase.duration),
            usages: collect_entries(&phase.usages, UsageEntry::try_new)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationEntry {
    pub unit: TimeUnit,
    pub number: i32,
}

impl From<Duration> for DurationEntry {
    fn from(duration: Duration) -> Self {
        Self {
            unit: duration.unit,
            number: duration.number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub billing_period: String,
    pub tiers: Vec<TierEntry>,
}

impl UsageEntry {
    fn try_new(usage: &Usage) -> CatalogResult<Self> {
        Ok(Self {
            billing_period: usage.billing_period.to_string(),
            tiers: collect_entries(&usage.tiers, TierEntry::try_new)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEntry {
    pub blocks: Vec<TieredBlockEntry>,
}

impl TierEntry {
    fn try_new(tier: &Tier) -> CatalogResult<Self> {
        Ok(Self {
            blocks: collect_entries(&tier.blocks, TieredBlockEntry::try_new)?,
        })
    }
}

/// `size` and `max` are carried as strings so they render exactly as the
/// catalog defined them (`"1.0"`, `"-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredBlockEntry {
    pub unit: String,
    pub size: String,
    pub max: String,
    pub prices: Vec<PriceEntry>,
}

impl TieredBlockEntry {
    fn try_new(block: &TieredBlock) -> CatalogResult<Self> {
        Ok(Self {
            unit: block.unit.name.clone(),
            size: block.size.to_string(),
            max: block.max.to_string(),
            prices: price_entries(Some(&block.price))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

impl TryFrom<&Price> for PriceEntry {
    type Error = CatalogError;

    fn try_from(price: &Price) -> Result<Self, Self::Error> {
        Ok(Self {
            currency: price.currency().to_string(),
            value: price.value()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListEntry {
    pub name: String,
    pub plans: Vec<String>,
}

impl From<&PriceList> for PriceListEntry {
    fn from(price_list: &PriceList) -> Self {
        Self {
            name: price_list.name().to_string(),
            plans: price_list.plan_names().map(str::to_string).collect(),
        }
    }
}

fn collect_entries<T, E>(
    items: &[T],
    build: impl Fn(&T) -> CatalogResult<E>,
) -> CatalogResult<Vec<E>> {
    items.iter().map(build).collect()
}

/// Absent prices project to an empty list, never to `null`.
fn price_entries(price: Option<&InternationalPrice>) -> CatalogResult<Vec<PriceEntry>> {
    match price {
        Some(price) => collect_entries(price.prices(), |p| PriceEntry::try_from(p)),
        None => Ok(Vec::new()),
    }
}

/// Projects a catalog accessor into a [`CatalogDocument`].
///
/// Pure and synchronous: the accessor is only read. Errors from the accessor
/// (including a price without a value) abort the projection; no partial
/// document is produced.
#[derive(Debug)]
pub struct CatalogProjector<'a, C: ?Sized> {
    catalog: &'a C,
}

impl<'a, C> CatalogProjector<'a, C>
where
    C: CatalogApi + ?Sized,
{
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    pub fn project(&self, requested_date: DateTime<Utc>) -> CatalogResult<CatalogDocument> {
        let name = self.catalog.name().to_string();
        let effective_date = self.catalog.effective_date(requested_date)?;
        let currencies = self.catalog.supported_currencies(requested_date)?.to_vec();

        let plans = self.catalog.plans(requested_date)?;

        // First sighting of a product fixes its metadata; later plans only
        // append to its plan list.
        let mut products: IndexMap<&str, ProductEntry> = IndexMap::new();
        for plan in plans {
            let product = plan.product();
            let entry = products
                .entry(product.name())
                .or_insert_with(|| ProductEntry::new(product));
            entry.plans.push(PlanEntry::try_new(plan)?);
        }
        let products: Vec<ProductEntry> = products.into_values().collect();

        let price_lists = self
            .catalog
            .price_lists(requested_date)?
            .iter()
            .map(PriceListEntry::from)
            .collect::<Vec<_>>();

        tracing::debug!(
            catalog = %name,
            requested_date = %requested_date,
            effective_date = %effective_date,
            plans = plans.len(),
            products = products.len(),
            price_lists = price_lists.len(),
            "catalog projected"
        );

        Ok(CatalogDocument {
            name,
            effective_date,
            currencies,
            products,
            price_lists,
        })
    }
}
