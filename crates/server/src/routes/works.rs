//! Public works pages: the gallery and the per-project detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use montage_core::{Embed, resolve_embed};
use tracing::instrument;

use crate::db::{PageRepository, WorkRepository};
use crate::error::AppError;
use crate::filters;
use crate::models::{WorkItem, WorksPage};
use crate::routes::NotConfiguredTemplate;
use crate::state::AppState;

/// Work item display data for the gallery grid.
pub struct WorkView {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub embed: Option<Embed>,
}

impl From<&WorkItem> for WorkView {
    fn from(work: &WorkItem) -> Self {
        Self {
            title: work.title.clone(),
            slug: work.slug.clone(),
            description: work.description.clone(),
            embed: resolve_embed(work.provider, &work.video_url),
        }
    }
}

/// Works gallery template.
#[derive(Template, WebTemplate)]
#[template(path = "works.html")]
pub struct WorksTemplate {
    pub page: WorksPage,
    pub works: Vec<WorkView>,
}

/// Work detail template.
#[derive(Template, WebTemplate)]
#[template(path = "work_detail.html")]
pub struct WorkDetailTemplate {
    pub work: WorkView,
}

/// Display the works gallery with published items only.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let Some(page) = PageRepository::new(state.pool()).get_works_page().await? else {
        return Ok(NotConfiguredTemplate { page_name: "Works" }.into_response());
    };

    let works = WorkRepository::new(state.pool())
        .list(true)
        .await?
        .iter()
        .map(WorkView::from)
        .collect();

    Ok(WorksTemplate { page, works }.into_response())
}

/// Display a single published work by slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let works = WorkRepository::new(state.pool()).list(true).await?;

    let Some(work) = works.iter().find(|w| w.slug == slug) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    Ok(WorkDetailTemplate {
        work: WorkView::from(work),
    }
    .into_response())
}
