//! In-memory, versioned catalog.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use planbook_core::{DomainError, DomainResult, Entity};

use crate::accessor::CatalogApi;
use crate::currency::Currency;
use crate::error::{CatalogError, CatalogResult};
use crate::plan::Plan;
use crate::price_list::PriceList;
use crate::product::Product;

/// One version of the catalog, effective from `effective_date` until the next
/// version takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneCatalog {
    effective_date: DateTime<Utc>,
    currencies: Vec<Currency>,
    products: Vec<Product>,
    plans: Vec<Plan>,
    price_lists: Vec<PriceList>,
}

impl StandaloneCatalog {
    /// Build a catalog version.
    ///
    /// Currencies and product, plan and price list names must be unique, and
    /// every plan named by a price list must be one of `plans`.
    pub fn new(
        effective_date: DateTime<Utc>,
        currencies: Vec<Currency>,
        products: Vec<Product>,
        plans: Vec<Plan>,
        price_lists: Vec<PriceList>,
    ) -> DomainResult<Self> {
        let mut seen_currencies = HashSet::new();
        if let Some(dup) = currencies.iter().find(|c| !seen_currencies.insert(*c)) {
            return Err(DomainError::validation(format!("duplicate currency '{dup}'")));
        }
        ensure_unique("product", &products)?;
        ensure_unique("plan", &plans)?;
        ensure_unique("price list", &price_lists)?;

        let plan_names: HashSet<&str> = plans.iter().map(Plan::name).collect();
        for price_list in &price_lists {
            if let Some(missing) = price_list.plan_names().find(|n| !plan_names.contains(n)) {
                return Err(DomainError::unknown_reference("plan", missing));
            }
        }

        Ok(Self {
            effective_date,
            currencies,
            products,
            plans,
            price_lists,
        })
    }

    pub fn effective_date(&self) -> DateTime<Utc> {
        self.effective_date
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn price_lists(&self) -> &[PriceList] {
        &self.price_lists
    }
}

fn ensure_unique<E>(kind: &str, entities: &[E]) -> DomainResult<()>
where
    E: Entity<Id = str>,
{
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(DomainError::validation(format!(
                "duplicate {kind} name '{}'",
                entity.id()
            )));
        }
    }
    Ok(())
}

/// A named catalog made of versions ordered by effective date.
///
/// Immutable once built; share it behind an `Arc` and query it from any
/// number of requests without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedCatalog {
    name: String,
    versions: Vec<StandaloneCatalog>,
}

impl VersionedCatalog {
    /// Build a versioned catalog. Versions may be passed in any order; two
    /// versions with the same effective date are rejected.
    pub fn new(name: impl Into<String>, mut versions: Vec<StandaloneCatalog>) -> DomainResult<Self> {
        versions.sort_by_key(StandaloneCatalog::effective_date);
        if let Some(pair) = versions
            .windows(2)
            .find(|w| w[0].effective_date == w[1].effective_date)
        {
            return Err(DomainError::validation(format!(
                "two catalog versions share effective date {}",
                pair[0].effective_date.to_rfc3339()
            )));
        }

        Ok(Self {
            name: name.into(),
            versions,
        })
    }

    /// A catalog with no versions: every dated query fails.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
        }
    }

    pub fn versions(&self) -> &[StandaloneCatalog] {
        &self.versions
    }

    /// The latest version whose effective date is not after `at`.
    pub fn version_at(&self, at: DateTime<Utc>) -> CatalogResult<&StandaloneCatalog> {
        let idx = self.versions.partition_point(|v| v.effective_date <= at);
        if idx == 0 {
            return Err(CatalogError::no_version_effective_at(at));
        }
        Ok(&self.versions[idx - 1])
    }
}

impl CatalogApi for VersionedCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn effective_date(&self, at: DateTime<Utc>) -> CatalogResult<DateTime<Utc>> {
        Ok(self.version_at(at)?.effective_date())
    }

    fn supported_currencies(&self, at: DateTime<Utc>) -> CatalogResult<&[Currency]> {
        Ok(self.version_at(at)?.currencies())
    }

    fn plans(&self, at: DateTime<Utc>) -> CatalogResult<&[Plan]> {
        Ok(self.version_at(at)?.plans())
    }

    fn price_lists(&self, at: DateTime<Utc>) -> CatalogResult<&[PriceList]> {
        Ok(self.version_at(at)?.price_lists())
    }
}
