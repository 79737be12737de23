//! Home section repository.
//!
//! Sections are ordered children of the home page singleton. New sections
//! take `sort_order = max(existing) + 10`, leaving gaps so later inserts
//! never force a renumbering. Listing orders by `sort_order` with the row
//! id as the deterministic tie-break.

use montage_core::{Direction, SectionId, plan_move};
use sqlx::PgPool;

use super::{RepositoryError, SINGLETON_ID};
use crate::models::{HomePage, HomeSection};

/// Partial update for a section: only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub html: Option<String>,
    pub photo_url: Option<String>,
    pub photo_urls_json: Option<String>,
    pub sort_order: Option<i32>,
}

impl SectionPatch {
    /// True when no field is supplied; such patches are rejected upstream.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.html.is_none()
            && self.photo_url.is_none()
            && self.photo_urls_json.is_none()
            && self.sort_order.is_none()
    }
}

const SELECT_COLUMNS: &str =
    "id, home_id, title, html, photo_url, photo_urls_json, sort_order";

/// Repository for home section operations.
pub struct SectionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SectionRepository<'a> {
    /// Create a new section repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all sections ordered by sort key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<HomeSection>, RepositoryError> {
        let sections = sqlx::query_as::<_, HomeSection>(&format!(
            r"
            SELECT {SELECT_COLUMNS}
            FROM home_section
            WHERE home_id = $1
            ORDER BY sort_order ASC, id ASC
            "
        ))
        .bind(SINGLETON_ID)
        .fetch_all(self.pool)
        .await?;

        Ok(sections)
    }

    /// Create a section at the end of the list.
    ///
    /// The home page singleton is created with its placeholder defaults
    /// first if it does not exist yet, so the parent reference always
    /// resolves.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn create(
        &self,
        title: &str,
        html: &str,
        photo_url: &str,
    ) -> Result<HomeSection, RepositoryError> {
        self.ensure_parent().await?;

        let section = sqlx::query_as::<_, HomeSection>(&format!(
            r"
            INSERT INTO home_section (home_id, title, html, photo_url, sort_order)
            VALUES (
                $1, $2, $3, $4,
                (SELECT COALESCE(MAX(sort_order), 0) + 10 FROM home_section WHERE home_id = $1)
            )
            RETURNING {SELECT_COLUMNS}
            "
        ))
        .bind(SINGLETON_ID)
        .bind(title)
        .bind(html)
        .bind(photo_url)
        .fetch_one(self.pool)
        .await?;

        Ok(section)
    }

    /// Apply a partial update to a section.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id and
    /// `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: SectionId,
        patch: &SectionPatch,
    ) -> Result<HomeSection, RepositoryError> {
        let section = sqlx::query_as::<_, HomeSection>(&format!(
            r"
            UPDATE home_section SET
                title = COALESCE($2, title),
                html = COALESCE($3, html),
                photo_url = COALESCE($4, photo_url),
                photo_urls_json = COALESCE($5, photo_urls_json),
                sort_order = COALESCE($6, sort_order)
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "
        ))
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.html.as_deref())
        .bind(patch.photo_url.as_deref())
        .bind(patch.photo_urls_json.as_deref())
        .bind(patch.sort_order)
        .fetch_optional(self.pool)
        .await?;

        section.ok_or(RepositoryError::NotFound)
    }

    /// Delete a section.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id and
    /// `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: SectionId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM home_section WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Move a section one position up or down by swapping sort keys with
    /// its neighbor. Returns `false` for boundary no-ops.
    ///
    /// The swap is two independent writes; a crash in between can leave a
    /// duplicated sort key, which the id tie-break tolerates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id and
    /// `RepositoryError::Database` if a query fails.
    pub async fn move_sibling(
        &self,
        id: SectionId,
        direction: Direction,
    ) -> Result<bool, RepositoryError> {
        let siblings = sqlx::query_as::<_, (i32, i32)>(
            r"
            SELECT id, sort_order
            FROM home_section
            WHERE home_id = $1
            ORDER BY sort_order ASC, id ASC
            ",
        )
        .bind(SINGLETON_ID)
        .fetch_all(self.pool)
        .await?;

        if !siblings.iter().any(|&(sib_id, _)| sib_id == id.as_i32()) {
            return Err(RepositoryError::NotFound);
        }

        let Some(swap) = plan_move(&siblings, id.as_i32(), direction) else {
            return Ok(false);
        };

        for (record_id, new_order) in [swap.first, swap.second] {
            sqlx::query("UPDATE home_section SET sort_order = $2 WHERE id = $1")
                .bind(record_id)
                .bind(new_order)
                .execute(self.pool)
                .await?;
        }

        Ok(true)
    }

    /// Insert the home page singleton with placeholder defaults when absent.
    async fn ensure_parent(&self) -> Result<(), RepositoryError> {
        let defaults = HomePage::default();

        sqlx::query(
            r"
            INSERT INTO home_page (
                id, hero_title, hero_subtitle, banner_image_url,
                director_name, director_role, director_avatar_url,
                intro_provider, intro_video_url, about_title, about_html
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO NOTHING
            ",
        )
        .bind(SINGLETON_ID)
        .bind(&defaults.hero_title)
        .bind(&defaults.hero_subtitle)
        .bind(&defaults.banner_image_url)
        .bind(&defaults.director_name)
        .bind(&defaults.director_role)
        .bind(&defaults.director_avatar_url)
        .bind(defaults.intro_provider)
        .bind(&defaults.intro_video_url)
        .bind(&defaults.about_title)
        .bind(&defaults.about_html)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_is_empty() {
        assert!(SectionPatch::default().is_empty());

        let patch = SectionPatch {
            title: Some("Background".to_owned()),
            ..SectionPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
