//! Read-side projections of the catalog.
//!
//! A projection turns the catalog accessor's view at a point in time into an
//! immutable, serializable document with stable wire field names.

pub mod catalog;

pub use catalog::{
    CatalogDocument, CatalogProjector, DurationEntry, PhaseEntry, PlanEntry, PriceEntry,
    PriceListEntry, ProductEntry, TierEntry, TieredBlockEntry, UsageEntry,
};
