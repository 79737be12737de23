//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /works                  - Works gallery (published only)
//! GET  /works/{slug}           - Work detail page
//! GET  /contacts               - Contacts page with the contact form
//! GET  /uploads/{*path}        - Uploaded media
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB ping)
//!
//! # Public API
//! POST /api/contact            - Contact form submission
//!
//! # Admin pages
//! GET  /admin                  - Dashboard (session-gated)
//! GET  /admin/login            - Login form
//!
//! # Admin API (session-gated except login)
//! POST   /api/admin/login
//! POST   /api/admin/logout
//! GET    /api/admin/home             PUT /api/admin/home
//! POST   /api/admin/sections
//! PATCH  /api/admin/sections/{id}    DELETE /api/admin/sections/{id}
//! POST   /api/admin/sections/{id}/move
//! GET    /api/admin/works            POST /api/admin/works
//! PATCH  /api/admin/works/{id}       DELETE /api/admin/works/{id}
//! POST   /api/admin/works/{id}/move
//! GET    /api/admin/works-page       PUT /api/admin/works-page
//! GET    /api/admin/contacts-page    PUT /api/admin/contacts-page
//! POST   /api/admin/upload
//! ```

pub mod admin;
pub mod contact;
pub mod contacts;
pub mod home;
pub mod uploads;
pub mod works;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::filters;
use crate::state::AppState;

/// Placeholder page shown when a public page has no stored content yet.
///
/// Deliberately a 200: an unconfigured site is a valid state, not an error.
#[derive(Template, WebTemplate)]
#[template(path = "not_configured.html")]
pub struct NotConfiguredTemplate {
    pub page_name: &'static str,
}

/// Liveness check.
async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness check: verifies the database answers.
async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.pool())
        .await
    {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .route("/works", get(works::index))
        .route("/works/{slug}", get(works::show))
        .route("/contacts", get(contacts::show))
        .route("/uploads/{*path}", get(uploads::serve))
        .route("/api/contact", post(contact::submit))
        .route("/health", get(health))
        .route("/health/ready", get(health_ready))
        .merge(admin::page_routes())
        .nest("/api/admin", admin::api_routes())
}
