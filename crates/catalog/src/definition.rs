//! Catalog definition documents (JSON) and their resolution into a
//! [`VersionedCatalog`].
//!
//! A definition lists, per version, its products and plans. Plans name their
//! product instead of embedding it; price lists name their plans. Both kinds
//! of reference are resolved (and rejected when dangling) at load time.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use planbook_core::{DomainError, DomainResult};

use crate::accessor::CatalogApi;
use crate::currency::Currency;
use crate::error::{CatalogError, CatalogResult};
use crate::plan::{Plan, PlanPhase};
use crate::price_list::PriceList;
use crate::product::Product;
use crate::versioned::{StandaloneCatalog, VersionedCatalog};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDefinition {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<VersionDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDefinition {
    pub effective_date: DateTime<Utc>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub plans: Vec<PlanDefinition>,
    #[serde(default)]
    pub price_lists: Vec<PriceList>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub name: String,
    pub product: String,
    #[serde(default)]
    pub phases: Vec<PlanPhase>,
}

impl CatalogDefinition {
    pub fn into_catalog(self) -> DomainResult<VersionedCatalog> {
        let versions = self
            .versions
            .into_iter()
            .map(VersionDefinition::into_standalone)
            .collect::<DomainResult<Vec<_>>>()?;
        VersionedCatalog::new(self.name, versions)
    }
}

impl VersionDefinition {
    fn into_standalone(self) -> DomainResult<StandaloneCatalog> {
        let products_by_name: HashMap<&str, &Product> =
            self.products.iter().map(|p| (p.name(), p)).collect();

        let plans = self
            .plans
            .into_iter()
            .map(|def| -> DomainResult<Plan> {
                let product = products_by_name
                    .get(def.product.as_str())
                    .ok_or_else(|| DomainError::unknown_reference("product", def.product.as_str()))?;
                Ok(Plan::new(def.name, (*product).clone(), def.phases))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        StandaloneCatalog::new(
            self.effective_date,
            self.currencies,
            self.products,
            plans,
            self.price_lists,
        )
    }
}

impl VersionedCatalog {
    /// Parse and resolve a JSON catalog definition.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let definition: CatalogDefinition =
            serde_json::from_str(json).map_err(|e| CatalogError::load(e.to_string()))?;
        let catalog = definition.into_catalog()?;

        tracing::info!(
            catalog = %catalog.name(),
            versions = catalog.versions().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Read and resolve a JSON catalog definition from disk.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::load(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::plan::BillingPeriod;

    const CATALOG: &str = r#"{
        "name": "Firearms",
        "versions": [{
            "effectiveDate": "2024-01-01T00:00:00Z",
            "currencies": ["USD", "EUR"],
            "products": [
                {"name": "Pistol", "category": "BASE", "available": ["Holster"]},
                {"name": "Holster", "category": "ADD_ON"}
            ],
            "plans": [{
                "name": "pistol-monthly",
                "product": "Pistol",
                "phases": [
                    {"phaseType": "TRIAL", "duration": {"unit": "DAYS", "number": 30},
                     "fixed": {"price": [{"currency": "USD", "value": 0}]}},
                    {"phaseType": "EVERGREEN", "duration": {"unit": "UNLIMITED", "number": -1},
                     "recurring": {"billingPeriod": "MONTHLY",
                                   "recurringPrice": [{"currency": "USD", "value": 29.95},
                                                      {"currency": "EUR", "value": 27.50}]}}
                ]
            }],
            "priceLists": [{"name": "DEFAULT", "plans": ["pistol-monthly"]}]
        }]
    }"#;

    #[test]
    fn loads_and_resolves_references() {
        let catalog = VersionedCatalog::from_json_str(CATALOG).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        assert_eq!(catalog.name(), "Firearms");
        let plans = catalog.plans(now).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].product().name(), "Pistol");
        assert_eq!(plans[0].product().available, vec!["Holster".to_string()]);
        assert_eq!(plans[0].recurring_billing_period(), BillingPeriod::Monthly);

        let evergreen = &plans[0].phases()[1];
        let prices = evergreen.recurring_price().unwrap().prices();
        assert_eq!(prices[1].value().unwrap().to_string(), "27.50");
    }

    #[test]
    fn unknown_product_reference_is_rejected() {
        let json = CATALOG.replace(r#""product": "Pistol""#, r#""product": "Rifle""#);
        let err = VersionedCatalog::from_json_str(&json).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Domain(DomainError::unknown_reference("product", "Rifle"))
        );
    }

    #[test]
    fn unknown_plan_in_price_list_is_rejected() {
        let json = CATALOG.replace(r#""plans": ["pistol-monthly"]"#, r#""plans": ["pistol-annual"]"#);
        let err = VersionedCatalog::from_json_str(&json).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Domain(DomainError::unknown_reference("plan", "pistol-annual"))
        );
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let err = VersionedCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Load(_)));

        let err = VersionedCatalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Load(_)));
    }
}
