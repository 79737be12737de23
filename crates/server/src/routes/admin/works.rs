//! Admin endpoints for the works page and its work items.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tracing::instrument;

use montage_core::{Direction, Provider, WorkItemId};

use crate::db::pages::{HeroData, PageRepository};
use crate::db::works::{NewWorkItem, WorkItemPatch, WorkRepository};
use crate::error::AppError;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

use super::required;

/// Works page hero payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksPagePayload {
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub banner_image_url: String,
}

/// Work item creation payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWork {
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

const fn default_published() -> bool {
    true
}

/// Work item partial-update payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWork {
    pub title: Option<String>,
    pub description: Option<String>,
    pub provider: Option<String>,
    pub video_url: Option<String>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Reorder payload.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

fn parse_provider(raw: &str) -> Result<Provider, AppError> {
    if raw.trim().is_empty() {
        return Ok(Provider::default());
    }
    Provider::from_str(raw).map_err(|e| AppError::Validation(e.to_string()))
}

/// Fetch the works page and every work item, drafts included.
///
/// GET /api/admin/works
#[instrument(skip(state, _admin))]
pub async fn list(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRepository::new(state.pool())
        .get_works_page()
        .await?
        .unwrap_or_default();

    let works = WorkRepository::new(state.pool()).list(false).await?;

    Ok(Json(json!({ "page": page, "works": works })))
}

/// Create a work item.
///
/// POST /api/admin/works
#[instrument(skip(state, _admin, payload))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Json(payload): Json<CreateWork>,
) -> Result<impl IntoResponse, AppError> {
    let new = NewWorkItem {
        title: required(&payload.title, "title")?,
        slug: payload
            .slug
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty()),
        description: payload.description.trim().to_owned(),
        provider: parse_provider(&payload.provider)?,
        video_url: required(&payload.video_url, "videoUrl")?,
        published: payload.published,
    };

    let work = WorkRepository::new(state.pool()).create(&new).await?;

    Ok(Json(work))
}

/// Partially update a work item.
///
/// PATCH /api/admin/works/{id}
#[instrument(skip(state, _admin, payload))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<WorkItemId>,
    Json(payload): Json<UpdateWork>,
) -> Result<impl IntoResponse, AppError> {
    let provider = match payload.provider.as_deref() {
        Some(raw) => Some(parse_provider(raw)?),
        None => None,
    };

    let patch = WorkItemPatch {
        title: payload.title.map(|s| s.trim().to_owned()),
        description: payload.description.map(|s| s.trim().to_owned()),
        provider,
        video_url: payload.video_url.map(|s| s.trim().to_owned()),
        published: payload.published,
        sort_order: payload.sort_order,
    };

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update.".to_owned()));
    }

    let work = WorkRepository::new(state.pool()).update(id, &patch).await?;

    Ok(Json(work))
}

/// Delete a work item.
///
/// DELETE /api/admin/works/{id}
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<WorkItemId>,
) -> Result<impl IntoResponse, AppError> {
    WorkRepository::new(state.pool()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}

/// Move a work item up or down one position.
///
/// POST /api/admin/works/{id}/move
#[instrument(skip(state, _admin))]
pub async fn move_work(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<WorkItemId>,
    Json(payload): Json<MoveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let moved = WorkRepository::new(state.pool())
        .move_sibling(id, payload.direction)
        .await?;

    Ok(Json(json!({ "ok": true, "moved": moved })))
}

/// Fetch the works page hero for editing.
///
/// GET /api/admin/works-page
#[instrument(skip(state, _admin))]
pub async fn get_page(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRepository::new(state.pool())
        .get_works_page()
        .await?
        .unwrap_or_default();

    Ok(Json(page))
}

/// Replace the works page singleton.
///
/// PUT /api/admin/works-page
#[instrument(skip(state, _admin, payload))]
pub async fn put_page(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Json(payload): Json<WorksPagePayload>,
) -> Result<impl IntoResponse, AppError> {
    let data = HeroData {
        hero_title: required(&payload.hero_title, "heroTitle")?,
        hero_subtitle: payload.hero_subtitle.trim().to_owned(),
        banner_image_url: required(&payload.banner_image_url, "bannerImageUrl")?,
    };

    PageRepository::new(state.pool())
        .upsert_works_page(&data)
        .await?;

    Ok(Json(json!({ "ok": true })))
}
