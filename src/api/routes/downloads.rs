//! Download recording handlers.

use super::{DownloadStarted, PathSegment, id_segment};
use crate::api::AppState;
use crate::error::{Error, Result};
use crate::types::{Material, MaterialId};
use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

/// POST /materials/:id/download - Record a download
#[utoipa::path(
    post,
    path = "/materials/{id}/download",
    tag = "downloads",
    params(
        ("id" = i64, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Material with its updated download count", body = Material),
        (status = 400, description = "Non-numeric id", body = crate::error::ApiError),
        (status = 404, description = "Material not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn record_download(
    State(state): State<AppState>,
    id: PathSegment,
) -> Result<Json<Material>> {
    let material = increment(&state, id_segment(id)?).await?;
    Ok(Json(material))
}

/// GET /download/:id - Start a download
///
/// Counts the download and names the file through `Content-Disposition`.
/// The body is JSON; no file bytes are served.
#[utoipa::path(
    get,
    path = "/download/{id}",
    tag = "downloads",
    params(
        ("id" = i64, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Download recorded", body = DownloadStarted,
            headers(("Content-Disposition" = String, description = "attachment; filename=\"<title>.pdf\""))),
        (status = 400, description = "Non-numeric id", body = crate::error::ApiError),
        (status = 404, description = "Material not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn start_download(
    State(state): State<AppState>,
    id: PathSegment,
) -> Result<Response> {
    let material = increment(&state, id_segment(id)?).await?;
    let disposition = content_disposition(&download_file_name(&material.title))?;

    let body = DownloadStarted {
        message: "Download started".to_string(),
        material,
    };

    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(body)).into_response())
}

async fn increment(state: &AppState, id: MaterialId) -> Result<Material> {
    let material = state
        .store
        .increment_downloads(id)
        .await?
        .ok_or(Error::NotFound(id))?;

    tracing::info!(
        material_id = %id,
        downloads = material.downloads,
        "Download recorded"
    );

    Ok(material)
}

/// File name offered for a material: whitespace runs become `-`, plus `.pdf`
pub(crate) fn download_file_name(title: &str) -> String {
    let stem = title.split_whitespace().collect::<Vec<_>>().join("-");
    if stem.is_empty() {
        "material.pdf".to_string()
    } else {
        format!("{stem}.pdf")
    }
}

/// `attachment` header value with an ASCII fallback and an RFC 5987 UTF-8 name
fn content_disposition(file_name: &str) -> Result<HeaderValue> {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let value = format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    );

    HeaderValue::from_str(&value)
        .map_err(|e| Error::ApiServerError(format!("invalid Content-Disposition header: {e}")))
}
