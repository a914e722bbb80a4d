//! Catalog domain module.
//!
//! This crate contains the product/pricing catalog model (products, plans,
//! phases, usage tiers, prices, price lists), the read-only accessor the rest
//! of the system queries "as of" a date, and an in-memory versioned catalog
//! that implements it. Pure domain logic: the only IO is loading a catalog
//! definition file.

pub mod accessor;
pub mod currency;
pub mod definition;
pub mod error;
pub mod plan;
pub mod price;
pub mod price_list;
pub mod product;
pub mod usage;
pub mod versioned;

pub use accessor::CatalogApi;
pub use currency::Currency;
pub use error::{CatalogError, CatalogResult};
pub use plan::{BillingPeriod, Duration, Fixed, PhaseType, Plan, PlanPhase, Recurring, TimeUnit};
pub use price::{InternationalPrice, Price};
pub use price_list::PriceList;
pub use product::{Product, ProductCategory};
pub use usage::{Tier, TieredBlock, Unit, Usage};
pub use versioned::{StandaloneCatalog, VersionedCatalog};
