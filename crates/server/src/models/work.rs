//! Work items listed on the works page.

use montage_core::{Provider, WorkItemId};
use serde::Serialize;
use sqlx::FromRow;

/// A published (or draft) project on the works page.
///
/// `slug` is unique across all work items and derived from the title at
/// creation time; `sort_order` is a sparse key assigned in increments of 10.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: WorkItemId,
    pub works_page_id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub provider: Provider,
    pub video_url: String,
    pub published: bool,
    pub sort_order: i32,
}
