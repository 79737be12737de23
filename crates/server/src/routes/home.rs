//! Public home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use montage_core::{Embed, resolve_embed};
use tracing::instrument;

use crate::db::{PageRepository, SectionRepository};
use crate::error::AppError;
use crate::filters;
use crate::models::{HomePage, HomeSection};
use crate::routes::NotConfiguredTemplate;
use crate::state::AppState;

/// Section display data for the template.
pub struct SectionView {
    pub title: String,
    pub html: String,
    pub photos: Vec<String>,
}

impl From<&HomeSection> for SectionView {
    fn from(section: &HomeSection) -> Self {
        Self {
            title: section.title.clone(),
            html: section.html.clone(),
            photos: section.photo_set().urls(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: HomePage,
    pub intro_embed: Option<Embed>,
    pub sections: Vec<SectionView>,
}

/// Display the home page, or the placeholder when it is not configured yet.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pages = PageRepository::new(state.pool());

    let Some(page) = pages.get_home().await? else {
        return Ok(NotConfiguredTemplate {
            page_name: "Home",
        }
        .into_response());
    };

    let sections = SectionRepository::new(state.pool())
        .list()
        .await?
        .iter()
        .map(SectionView::from)
        .collect();

    let intro_embed = resolve_embed(page.intro_provider, &page.intro_video_url);

    Ok(HomeTemplate {
        page,
        intro_embed,
        sections,
    }
    .into_response())
}
