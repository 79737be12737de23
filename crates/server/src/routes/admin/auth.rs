//! Admin login and logout.

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::{clear_session_cookie, session_cookie};
use crate::services::AuthService;
use crate::state::AppState;

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Log in and establish an admin session.
///
/// POST /api/admin/login
///
/// Any credential failure responds with the same generic 401, never
/// revealing whether the email exists.
#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required.".to_owned(),
        ));
    }

    let session = AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await?;

    let jar = jar.add(session_cookie(state.config(), session.id));

    Ok((jar, Json(json!({ "ok": true }))))
}

/// Log out, destroying the session row and clearing the cookie.
///
/// POST /api/admin/logout
///
/// Idempotent: succeeds whether or not a valid session cookie came in.
#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = jar.get(&state.config().session_cookie) {
        AuthService::new(state.pool()).logout(cookie.value()).await?;
    }

    let jar = jar.add(clear_session_cookie(state.config()));

    Ok((jar, Json(json!({ "ok": true }))))
}
