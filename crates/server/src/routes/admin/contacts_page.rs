//! Admin endpoints for the contacts page hero.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::db::pages::{HeroData, PageRepository};
use crate::error::AppError;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

use super::required;

/// Contacts page hero payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsPagePayload {
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub banner_image_url: String,
}

/// Fetch the contacts page hero for editing.
///
/// GET /api/admin/contacts-page
#[instrument(skip(state, _admin))]
pub async fn get(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRepository::new(state.pool())
        .get_contacts_page()
        .await?
        .unwrap_or_default();

    Ok(Json(page))
}

/// Replace the contacts page singleton.
///
/// PUT /api/admin/contacts-page
#[instrument(skip(state, _admin, payload))]
pub async fn put(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Json(payload): Json<ContactsPagePayload>,
) -> Result<impl IntoResponse, AppError> {
    let data = HeroData {
        hero_title: required(&payload.hero_title, "heroTitle")?,
        hero_subtitle: payload.hero_subtitle.trim().to_owned(),
        banner_image_url: required(&payload.banner_image_url, "bannerImageUrl")?,
    };

    PageRepository::new(state.pool())
        .upsert_contacts_page(&data)
        .await?;

    Ok(Json(json!({ "ok": true })))
}
