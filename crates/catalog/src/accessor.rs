//! Read-only catalog query surface.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::currency::Currency;
use crate::error::CatalogResult;
use crate::plan::Plan;
use crate::price_list::PriceList;

/// Catalog accessor: every query is answered "as of" a requested date.
///
/// Implementations must hand out views that do not change for a given date,
/// so concurrent callers asking about different dates never observe each
/// other.
pub trait CatalogApi: Send + Sync {
    /// Catalog name (stable across versions).
    fn name(&self) -> &str;

    /// Effective date of the catalog version applicable at `at`.
    fn effective_date(&self, at: DateTime<Utc>) -> CatalogResult<DateTime<Utc>>;

    /// Currencies supported at `at`, in catalog order.
    fn supported_currencies(&self, at: DateTime<Utc>) -> CatalogResult<&[Currency]>;

    /// Plans applicable at `at`, in catalog declaration order.
    fn plans(&self, at: DateTime<Utc>) -> CatalogResult<&[Plan]>;

    /// Price lists applicable at `at`, in catalog declaration order.
    fn price_lists(&self, at: DateTime<Utc>) -> CatalogResult<&[PriceList]>;
}

impl<S> CatalogApi for Arc<S>
where
    S: CatalogApi + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn effective_date(&self, at: DateTime<Utc>) -> CatalogResult<DateTime<Utc>> {
        (**self).effective_date(at)
    }

    fn supported_currencies(&self, at: DateTime<Utc>) -> CatalogResult<&[Currency]> {
        (**self).supported_currencies(at)
    }

    fn plans(&self, at: DateTime<Utc>) -> CatalogResult<&[Plan]> {
        (**self).plans(at)
    }

    fn price_lists(&self, at: DateTime<Utc>) -> CatalogResult<&[PriceList]> {
        (**self).price_lists(at)
    }
}
