//! Public contact form submission.

use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::db::contact_messages::{self, NewContactMessage};
use crate::error::AppError;
use crate::state::AppState;

/// Contact form payload.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Submit a contact message.
///
/// POST /api/contact
///
/// Fields are trimmed before validation. Undersized fields reject with 400;
/// the stored row also captures the forwarded client address and user agent
/// when present.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse, AppError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    if name.len() < 2 {
        return Err(AppError::Validation("Please enter your name.".to_owned()));
    }
    if email.len() < 5 {
        return Err(AppError::Validation(
            "Please enter a valid email address.".to_owned(),
        ));
    }
    if message.len() < 10 {
        return Err(AppError::Validation(
            "Please write a longer message.".to_owned(),
        ));
    }

    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    contact_messages::insert(
        state.pool(),
        &NewContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            ip: header_value("x-forwarded-for"),
            user_agent: header_value("user-agent"),
        },
    )
    .await?;

    tracing::info!("Contact message received");

    Ok(Json(json!({ "ok": true })))
}
