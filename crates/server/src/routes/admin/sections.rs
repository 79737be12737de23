//! Admin endpoints for home page sections.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use montage_core::{Direction, SectionId};

use crate::db::sections::{SectionPatch, SectionRepository};
use crate::error::AppError;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Section creation payload. Absent fields take placeholder defaults so the
/// editor can add an empty block and fill it in afterwards.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSection {
    pub title: Option<String>,
    pub html: Option<String>,
    pub photo_url: Option<String>,
}

/// Section partial-update payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSection {
    pub title: Option<String>,
    pub html: Option<String>,
    pub photo_url: Option<String>,
    pub photo_urls_json: Option<String>,
    pub sort_order: Option<i32>,
}

/// Reorder payload.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// Append a section to the home page.
///
/// POST /api/admin/sections
#[instrument(skip(state, _admin, payload))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Json(payload): Json<CreateSection>,
) -> Result<impl IntoResponse, AppError> {
    let title = payload.title.as_deref().map_or("Background", str::trim);
    let html = payload
        .html
        .as_deref()
        .map_or("<p>Write your text here...</p>", str::trim);
    let photo_url = payload
        .photo_url
        .as_deref()
        .map_or("/uploads/placeholder.jpg", str::trim);

    let section = SectionRepository::new(state.pool())
        .create(title, html, photo_url)
        .await?;

    Ok(Json(section))
}

/// Partially update a section.
///
/// PATCH /api/admin/sections/{id}
#[instrument(skip(state, _admin, payload))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<SectionId>,
    Json(payload): Json<UpdateSection>,
) -> Result<impl IntoResponse, AppError> {
    let patch = SectionPatch {
        title: payload.title.map(|s| s.trim().to_owned()),
        html: payload.html.map(|s| s.trim().to_owned()),
        photo_url: payload.photo_url.map(|s| s.trim().to_owned()),
        photo_urls_json: payload.photo_urls_json.map(|s| s.trim().to_owned()),
        sort_order: payload.sort_order,
    };

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update.".to_owned()));
    }

    let section = SectionRepository::new(state.pool()).update(id, &patch).await?;

    Ok(Json(section))
}

/// Delete a section.
///
/// DELETE /api/admin/sections/{id}
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<SectionId>,
) -> Result<impl IntoResponse, AppError> {
    SectionRepository::new(state.pool()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}

/// Move a section up or down one position.
///
/// POST /api/admin/sections/{id}/move
///
/// A move past either end of the list is a successful no-op.
#[instrument(skip(state, _admin))]
pub async fn move_section(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<SectionId>,
    Json(payload): Json<MoveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let moved = SectionRepository::new(state.pool())
        .move_sibling(id, payload.direction)
        .await?;

    Ok(Json(json!({ "ok": true, "moved": moved })))
}
