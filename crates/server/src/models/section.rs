//! Home page sections.

use montage_core::{PhotoSet, SectionId};
use serde::Serialize;
use sqlx::FromRow;

/// An ordered content block on the home page.
///
/// Photo storage is dual-form: `photo_url` is the legacy single URL,
/// `photo_urls_json` the newer JSON-encoded ordered list. Renderers go
/// through [`HomeSection::photo_set`] and never touch the raw columns.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HomeSection {
    pub id: SectionId,
    pub home_id: i32,
    pub title: String,
    pub html: String,
    pub photo_url: Option<String>,
    pub photo_urls_json: Option<String>,
    pub sort_order: i32,
}

impl HomeSection {
    /// Normalized photo representation for rendering.
    #[must_use]
    pub fn photo_set(&self) -> PhotoSet {
        PhotoSet::from_columns(self.photo_urls_json.as_deref(), self.photo_url.as_deref())
    }
}
