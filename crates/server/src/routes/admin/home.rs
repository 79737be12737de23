//! Admin home page endpoints.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tracing::instrument;

use montage_core::Provider;

use crate::db::pages::{HomePageData, PageRepository};
use crate::db::sections::SectionRepository;
use crate::error::AppError;
use crate::middleware::RequireAdminAuth;
use crate::models::HomePage;
use crate::state::AppState;

use super::required;

/// Home page edit payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePagePayload {
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub banner_image_url: String,
    #[serde(default)]
    pub director_name: String,
    #[serde(default)]
    pub director_role: String,
    #[serde(default)]
    pub director_avatar_url: String,
    #[serde(default)]
    pub intro_provider: String,
    #[serde(default)]
    pub intro_video_url: String,
    #[serde(default)]
    pub about_title: String,
    #[serde(default)]
    pub about_html: String,
}

/// Fetch the home page and its ordered sections for editing.
///
/// GET /api/admin/home
///
/// Returns the built-in placeholder content when the page has never been
/// saved, so the editor always has something to start from.
#[instrument(skip(state, _admin))]
pub async fn get(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRepository::new(state.pool())
        .get_home()
        .await?
        .unwrap_or_default();

    let sections = SectionRepository::new(state.pool()).list().await?;

    Ok(Json(json!({ "page": page, "sections": sections })))
}

/// Replace the home page singleton.
///
/// PUT /api/admin/home
#[instrument(skip(state, _admin, payload))]
pub async fn put(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Json(payload): Json<HomePagePayload>,
) -> Result<impl IntoResponse, AppError> {
    let provider = if payload.intro_provider.trim().is_empty() {
        HomePage::default().intro_provider
    } else {
        Provider::from_str(&payload.intro_provider)
            .map_err(|e| AppError::Validation(e.to_string()))?
    };

    let data = HomePageData {
        hero_title: required(&payload.hero_title, "heroTitle")?,
        hero_subtitle: payload.hero_subtitle.trim().to_owned(),
        banner_image_url: required(&payload.banner_image_url, "bannerImageUrl")?,
        director_name: required(&payload.director_name, "directorName")?,
        director_role: payload.director_role.trim().to_owned(),
        director_avatar_url: payload.director_avatar_url.trim().to_owned(),
        intro_provider: provider,
        intro_video_url: payload.intro_video_url.trim().to_owned(),
        about_title: payload.about_title.trim().to_owned(),
        about_html: payload.about_html.trim().to_owned(),
    };

    PageRepository::new(state.pool()).upsert_home(&data).await?;

    Ok(Json(json!({ "ok": true })))
}
