//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the study-catalog REST
//! API using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the study-catalog REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "study-catalog REST API",
        version = "0.1.0",
        description = "Browse, search and download-count BSc study materials: books, notes, past papers and research",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Materials
        crate::api::routes::list_materials,
        crate::api::routes::create_material,
        crate::api::routes::featured_materials,
        crate::api::routes::browse_materials,
        crate::api::routes::get_material,
        crate::api::routes::search_materials,
        crate::api::routes::materials_by_category,
        crate::api::routes::materials_by_subject,
        crate::api::routes::materials_by_year_level,

        // Downloads
        crate::api::routes::record_download,
        crate::api::routes::start_download,

        // Categories
        crate::api::routes::category_counts,

        // System
        crate::api::routes::taxonomy,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::MaterialId,
        crate::types::Category,
        crate::types::Subject,
        crate::types::YearLevel,
        crate::types::EnumKind,
        crate::types::Material,
        crate::types::MaterialDraft,
        crate::types::TaxonomyEntry,
        crate::types::Taxonomy,

        // Config types from config.rs
        crate::config::Config,
        crate::config::CatalogConfig,
        crate::config::ServerIntegrationConfig,
        crate::config::ApiConfig,

        // API response types from routes
        crate::api::routes::DownloadStarted,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
        crate::error::FieldError,
    )),
    tags(
        (name = "materials", description = "Materials - List, look up, filter, search and create catalog entries"),
        (name = "downloads", description = "Downloads - Record downloads and name the offered file"),
        (name = "categories", description = "Categories - Per-category material counts"),
        (name = "system", description = "System endpoints - Taxonomy, health checks, OpenAPI spec"),
    )
)]
pub struct ApiDoc;
