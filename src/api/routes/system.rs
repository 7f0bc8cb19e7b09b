//! System handlers: taxonomy, health, OpenAPI.

use crate::types::Taxonomy;
use axum::{Json, response::IntoResponse};
use serde_json::json;

/// GET /taxonomy - Categories, subjects and year levels with labels
#[utoipa::path(
    get,
    path = "/taxonomy",
    tag = "system",
    responses(
        (status = 200, description = "The fixed enumerations with display labels", body = Taxonomy)
    )
)]
pub async fn taxonomy() -> Json<Taxonomy> {
    Json(Taxonomy::current())
}

/// GET /health - Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI 3.1 specification in JSON format")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}
