//! REST API server module
//!
//! Exposes the material store and the query engine over HTTP/JSON, with an
//! OpenAPI 3.1 document describing every endpoint.

use crate::{Config, Result, storage::MaterialRepository};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Materials
/// - `GET /materials` - List all materials
/// - `POST /materials` - Create a material
/// - `GET /materials/featured` - Featured materials (`?limit=N`)
/// - `GET /materials/browse` - Combined filter, search and sort
/// - `GET /materials/:id` - Get single material
/// - `GET /materials/search/:query` - Keyword search
/// - `GET /materials/category/:category` - Filter by category
/// - `GET /materials/subject/:subject` - Filter by subject
/// - `GET /materials/year-level/:year_level` - Filter by year level
///
/// ## Downloads
/// - `POST /materials/:id/download` - Record a download
/// - `GET /download/:id` - Start a download (records it and names the file)
///
/// ## Categories
/// - `GET /categories/counts` - Material count per category
///
/// ## System
/// - `GET /taxonomy` - Categories, subjects and year levels with labels
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled),
///   reading its document from `/api-docs/openapi.json`
pub fn create_router(store: Arc<dyn MaterialRepository>, config: Arc<Config>) -> Router {
    let state = AppState::new(store, config.clone());

    let router = Router::new()
        // Materials
        .route(
            "/materials",
            get(routes::list_materials).post(routes::create_material),
        )
        .route("/materials/featured", get(routes::featured_materials))
        .route("/materials/browse", get(routes::browse_materials))
        .route("/materials/:id", get(routes::get_material))
        .route("/materials/search/:query", get(routes::search_materials))
        .route(
            "/materials/category/:category",
            get(routes::materials_by_category),
        )
        .route(
            "/materials/subject/:subject",
            get(routes::materials_by_subject),
        )
        .route(
            "/materials/year-level/:year_level",
            get(routes::materials_by_year_level),
        )
        // Downloads
        .route("/materials/:id/download", post(routes::record_download))
        .route("/download/:id", get(routes::start_download))
        // Categories
        .route("/categories/counts", get(routes::category_counts))
        // System
        .route("/taxonomy", get(routes::taxonomy))
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (before applying state).
    // Its document path must not collide with GET /openapi.json above.
    let router = if config.server.api.swagger_ui {
        router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
    } else {
        router
    };

    let router = router.with_state(state).layer(TraceLayer::new_for_http());

    if config.server.api.cors_enabled {
        let cors = build_cors_layer(&config.server.api.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// `"*"` anywhere in the list (or an empty list) allows any origin.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// Runs until a termination signal arrives (see [`crate::shutdown_signal`]),
/// then drains in-flight requests and returns.
///
/// # Example
///
/// ```no_run
/// use study_catalog::{Config, MemoryStore};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let store = Arc::new(MemoryStore::with_sample_data());
///
/// // Start API server (blocks until shutdown)
/// study_catalog::api::start_api_server(store, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(
    store: Arc<dyn MaterialRepository>,
    config: Arc<Config>,
) -> Result<()> {
    serve(store, config, crate::shutdown_signal()).await
}

/// Like [`start_api_server`], but stops when `shutdown` completes
pub async fn serve<F>(
    store: Arc<dyn MaterialRepository>,
    config: Arc<Config>,
    shutdown: F,
) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let bind_address = config.server.api.bind_address;

    tracing::info!(
        address = %bind_address,
        store = store.name(),
        "Starting API server"
    );

    let app = create_router(store, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(
        address = %listener.local_addr().unwrap_or(bind_address),
        "API server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
