use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use planbook_projections::CatalogDocument;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `GET /catalog?requestedDate=...`: the catalog as of the requested date.
pub async fn get_catalog(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CatalogQuery>,
) -> axum::response::Response {
    let requested_date = match query.requested_date_or(Utc::now()) {
        Ok(d) => d,
        Err(e) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_date",
                format!("requestedDate must be an RFC 3339 timestamp: {e}"),
            );
        }
    };

    match CatalogDocument::project(services.catalog(), requested_date) {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => {
            tracing::warn!(%requested_date, error = %e, "catalog projection failed");
            errors::catalog_error_to_response(e)
        }
    }
}
