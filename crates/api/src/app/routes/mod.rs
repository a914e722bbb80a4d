use axum::{routing::get, Router};

pub mod catalog;
pub mod system;
pub mod translations;

/// Router for all catalog-facing endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/node", get(system::node_info))
        .route("/catalog", get(catalog::get_catalog))
        .route("/translations/:key", get(translations::translate))
}
