//! Category handlers.

use crate::api::AppState;
use crate::error::Result;
use crate::query;
use crate::types::Category;
use axum::{Json, extract::State};
use std::collections::BTreeMap;

/// GET /categories/counts - Material count per category
///
/// Every category appears in the result, including those with no materials.
#[utoipa::path(
    get,
    path = "/categories/counts",
    tag = "categories",
    responses(
        (status = 200, description = "Object mapping each category to its material count",
            body = BTreeMap<String, usize>,
            example = json!({"book": 6, "notes": 3, "past_paper": 3, "research": 0})),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn category_counts(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<Category, usize>>> {
    let materials = state.store.get_all().await?;
    Ok(Json(query::category_counts(&materials)))
}
