//! Public contacts page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::db::PageRepository;
use crate::error::AppError;
use crate::filters;
use crate::models::ContactsPage;
use crate::routes::NotConfiguredTemplate;
use crate::state::AppState;

/// Contacts page template.
#[derive(Template, WebTemplate)]
#[template(path = "contacts.html")]
pub struct ContactsTemplate {
    pub page: ContactsPage,
}

/// Display the contacts page with the contact form.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let Some(page) = PageRepository::new(state.pool()).get_contacts_page().await? else {
        return Ok(NotConfiguredTemplate {
            page_name: "Contacts",
        }
        .into_response());
    };

    Ok(ContactsTemplate { page }.into_response())
}
