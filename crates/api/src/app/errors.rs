use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use planbook_catalog::CatalogError;

/// Map a catalog failure to an error response. No partial document is ever
/// sent.
pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::CurrencyValueNull { .. } => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "currency_value_null",
            err.to_string(),
        ),
        CatalogError::CatalogApi(msg) => json_error(StatusCode::NOT_FOUND, "catalog_not_found", msg),
        CatalogError::Load(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalog_load_error", msg),
        CatalogError::Domain(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "catalog_invalid",
            e.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
