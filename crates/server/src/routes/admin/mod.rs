//! Admin surface: HTML pages under `/admin` and the JSON API under
//! `/api/admin`.
//!
//! Every endpoint except login requires a valid session cookie, enforced by
//! the [`RequireAdminAuth`](crate::middleware::RequireAdminAuth) extractor
//! on each handler.

pub mod auth;
pub mod contacts_page;
pub mod home;
pub mod pages;
pub mod sections;
pub mod upload;
pub mod works;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Trim a required string field, rejecting blanks with a field-level 400.
pub(crate) fn required(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} is required.")));
    }
    Ok(trimmed.to_owned())
}

/// Create the admin HTML page routes.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(pages::dashboard))
        .route("/admin/login", get(pages::login_page))
}

/// Create the admin JSON API routes, nested under `/api/admin`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/home", get(home::get).put(home::put))
        .route("/sections", post(sections::create))
        .route(
            "/sections/{id}",
            axum::routing::patch(sections::update).delete(sections::delete),
        )
        .route("/sections/{id}/move", post(sections::move_section))
        .route("/works", get(works::list).post(works::create))
        .route(
            "/works/{id}",
            axum::routing::patch(works::update).delete(works::delete),
        )
        .route("/works/{id}/move", post(works::move_work))
        .route("/works-page", get(works::get_page).put(works::put_page))
        .route(
            "/contacts-page",
            get(contacts_page::get).put(contacts_page::put),
        )
        .route("/upload", post(upload::upload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Reel  ", "title").unwrap(), "Reel");
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("   ", "title").is_err());
        assert!(required("", "title").is_err());
    }
}
