//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`materials`] - Listing, lookup, filtering, search and creation
//! - [`downloads`] - Download recording
//! - [`categories`] - Per-category counts
//! - [`system`] - Taxonomy, health, OpenAPI

use crate::error::{Error, FieldError, Result};
use crate::types::MaterialId;
use axum::extract::{Path, rejection::PathRejection};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

mod categories;
mod downloads;
mod materials;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use categories::*;
pub use downloads::*;
pub use materials::*;
pub use system::*;

// ============================================================================
// Query/Request Types (shared across handlers)
// ============================================================================

/// Query parameters for GET /materials/featured
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeaturedQuery {
    /// Maximum number of materials to return (default from config)
    pub limit: Option<String>,
}

/// Query parameters for GET /materials/browse
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BrowseQuery {
    /// Comma-separated categories; omitted or empty means no restriction
    pub categories: Option<String>,
    /// A subject, or `all`
    pub subject: Option<String>,
    /// Comma-separated year levels; empty means no restriction
    pub year_levels: Option<String>,
    /// `popular`, `newest`, `az`, `za` or `relevance`
    pub sort: Option<String>,
    /// Search text
    pub q: Option<String>,
}

/// Response body for GET /download/:id
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DownloadStarted {
    /// Human-readable status
    pub message: String,
    /// The material after its download count was incremented
    pub material: crate::types::Material,
}

// ============================================================================
// Path segment helpers
// ============================================================================

/// Path extraction as handlers receive it, rejection included
type PathSegment = std::result::Result<Path<String>, PathRejection>;

/// Material id from a path segment
///
/// Undecodable segments (`%FF`) and non-numeric ids both become
/// [`Error::MalformedId`], so clients always get the JSON error body.
fn id_segment(segment: PathSegment) -> Result<MaterialId> {
    let Path(raw) = segment.map_err(|rejection| Error::MalformedId(rejection.body_text()))?;
    raw.parse()
}

/// Free-text path segment; undecodable input is a validation error on `field`
fn text_segment(segment: PathSegment, field: &str) -> Result<String> {
    segment
        .map(|Path(text)| text)
        .map_err(|rejection| Error::Validation(vec![FieldError::new(field, rejection.body_text())]))
}
