//! Material handlers: listing, lookup, filtering, search, creation.

use super::{BrowseQuery, FeaturedQuery, PathSegment, id_segment, text_segment};
use crate::api::AppState;
use crate::error::{Error, FieldError, Result};
use crate::query::{self, BrowseRequest, SortOption};
use crate::types::{Category, Material, Subject, YearLevel};
use crate::validation;
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

/// GET /materials - List all materials
#[utoipa::path(
    get,
    path = "/materials",
    tag = "materials",
    responses(
        (status = 200, description = "All materials in insertion order", body = Vec<Material>),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn list_materials(State(state): State<AppState>) -> Result<Json<Vec<Material>>> {
    let materials = state.store.get_all().await?;
    Ok(Json(materials))
}

/// GET /materials/featured - Featured materials
#[utoipa::path(
    get,
    path = "/materials/featured",
    tag = "materials",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "First featured materials in store order", body = Vec<Material>),
        (status = 400, description = "Invalid limit", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn featured_materials(
    State(state): State<AppState>,
    Query(params): Query<FeaturedQuery>,
) -> Result<Json<Vec<Material>>> {
    let limit = match params.limit.as_deref().map(str::trim) {
        None | Some("") => state.config.catalog.featured_default_limit,
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            Error::Validation(vec![FieldError::new(
                "limit",
                format!("expected a non-negative integer, got '{raw}'"),
            )])
        })?,
    };

    let materials = state.store.get_all().await?;
    Ok(Json(query::featured(&materials, limit)))
}

/// GET /materials/browse - Combined filter, search and sort
#[utoipa::path(
    get,
    path = "/materials/browse",
    tag = "materials",
    params(BrowseQuery),
    responses(
        (status = 200, description = "Materials passing the filters, in the requested order", body = Vec<Material>),
        (status = 400, description = "Unknown category, subject or year level", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn browse_materials(
    State(state): State<AppState>,
    Query(params): Query<BrowseQuery>,
) -> Result<Json<Vec<Material>>> {
    let request = browse_request(&params)?;

    tracing::debug!(
        categories = request.filters.categories.len(),
        subject = ?request.filters.subject,
        year_levels = request.filters.year_levels.len(),
        sort = ?request.sort,
        query = request.query.as_deref().unwrap_or(""),
        "Browsing materials"
    );

    let materials = state.store.get_all().await?;
    Ok(Json(query::browse(&materials, &request)))
}

/// Translate browse query parameters into a [`BrowseRequest`]
///
/// Without an explicit `sort`, a search is ranked by relevance and a plain
/// listing by popularity.
fn browse_request(params: &BrowseQuery) -> Result<BrowseRequest> {
    let filters = validation::parse_filter_state(
        params.categories.as_deref(),
        params.subject.as_deref(),
        params.year_levels.as_deref(),
    )?;

    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    let sort = match (params.sort.as_deref(), query.as_deref()) {
        (Some(name), q) => SortOption::parse(name.trim(), q),
        (None, Some(q)) => SortOption::Relevance {
            query: q.to_string(),
        },
        (None, None) => SortOption::Popular,
    };

    Ok(BrowseRequest {
        filters,
        query,
        sort,
    })
}

/// GET /materials/:id - Get single material
#[utoipa::path(
    get,
    path = "/materials/{id}",
    tag = "materials",
    params(
        ("id" = i64, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Material record", body = Material),
        (status = 400, description = "Non-numeric id", body = crate::error::ApiError),
        (status = 404, description = "Material not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn get_material(
    State(state): State<AppState>,
    id: PathSegment,
) -> Result<Json<Material>> {
    let id = id_segment(id)?;

    state
        .store
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound(id))
}

/// GET /materials/search/:query - Keyword search
///
/// Queries shorter than `catalog.min_search_length` characters (after
/// trimming) return an empty list.
#[utoipa::path(
    get,
    path = "/materials/search/{query}",
    tag = "materials",
    params(
        ("query" = String, Path, description = "Search text, matched case-insensitively against title, description, author and institution")
    ),
    responses(
        (status = 200, description = "Matching materials", body = Vec<Material>),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn search_materials(
    State(state): State<AppState>,
    text: PathSegment,
) -> Result<Json<Vec<Material>>> {
    let text = text_segment(text, "query")?;

    if text.trim().chars().count() < state.config.catalog.min_search_length {
        tracing::debug!(query = %text, "Search query below minimum length");
        return Ok(Json(Vec::new()));
    }

    let materials = state.store.get_all().await?;
    let results = query::search(&materials, &text);

    tracing::debug!(query = %text, results = results.len(), "Searched materials");

    Ok(Json(results))
}

/// GET /materials/category/:category - Filter by category
#[utoipa::path(
    get,
    path = "/materials/category/{category}",
    tag = "materials",
    params(
        ("category" = Category, Path, description = "Category value")
    ),
    responses(
        (status = 200, description = "Materials in the category", body = Vec<Material>),
        (status = 400, description = "Unknown category", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn materials_by_category(
    State(state): State<AppState>,
    category: PathSegment,
) -> Result<Json<Vec<Material>>> {
    let category: Category = text_segment(category, "category")?.parse()?;
    let materials = state.store.get_all().await?;
    Ok(Json(query::by_category(&materials, category)))
}

/// GET /materials/subject/:subject - Filter by subject
#[utoipa::path(
    get,
    path = "/materials/subject/{subject}",
    tag = "materials",
    params(
        ("subject" = Subject, Path, description = "Subject value")
    ),
    responses(
        (status = 200, description = "Materials for the subject", body = Vec<Material>),
        (status = 400, description = "Unknown subject", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn materials_by_subject(
    State(state): State<AppState>,
    subject: PathSegment,
) -> Result<Json<Vec<Material>>> {
    let subject: Subject = text_segment(subject, "subject")?.parse()?;
    let materials = state.store.get_all().await?;
    Ok(Json(query::by_subject(&materials, subject)))
}

/// GET /materials/year-level/:year_level - Filter by year level
#[utoipa::path(
    get,
    path = "/materials/year-level/{year_level}",
    tag = "materials",
    params(
        ("year_level" = YearLevel, Path, description = "Year level value")
    ),
    responses(
        (status = 200, description = "Materials for the year level; materials without one are excluded", body = Vec<Material>),
        (status = 400, description = "Unknown year level", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn materials_by_year_level(
    State(state): State<AppState>,
    year_level: PathSegment,
) -> Result<Json<Vec<Material>>> {
    let year_level: YearLevel = text_segment(year_level, "year_level")?.parse()?;
    let materials = state.store.get_all().await?;
    Ok(Json(query::by_year_level(&materials, year_level)))
}

/// POST /materials - Create a material
#[utoipa::path(
    post,
    path = "/materials",
    tag = "materials",
    request_body = crate::types::MaterialDraft,
    responses(
        (status = 201, description = "Material created", body = Material),
        (status = 400, description = "Invalid payload; details.fields lists every offending field", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn create_material(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Material>)> {
    let Json(payload) = payload.map_err(|rejection| {
        Error::Validation(vec![FieldError::new("body", rejection.body_text())])
    })?;

    let draft = validation::validate_draft(&payload)?;
    let material = state.store.insert(draft).await?;

    tracing::info!(
        material_id = %material.id,
        title = %material.title,
        "Material created"
    );

    Ok((StatusCode::CREATED, Json(material)))
}
