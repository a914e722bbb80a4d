use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};

use crate::app::dto;
use crate::app::services::AppServices;

/// `GET /translations/:key`: unknown keys come back unchanged.
pub async fn translate(
    Extension(services): Extension<Arc<AppServices>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let value = services.translator().translate(&key).to_string();
    Json(dto::TranslationResponse { key, value })
}
