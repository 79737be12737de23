//! Work item repository.
//!
//! Work items are ordered children of the works page singleton. Slugs are
//! unique; the uniqueness check rides on the database constraint and the
//! insert retries with the next `-n` suffix on a collision, so two
//! concurrent creates with the same title cannot both win the same slug.

use montage_core::{Direction, Provider, WorkItemId, plan_move, slug};
use sqlx::PgPool;

use super::{RepositoryError, SINGLETON_ID};
use crate::models::{WorkItem, WorksPage};

/// Fields for creating a work item.
#[derive(Debug, Clone)]
pub struct NewWorkItem {
    pub title: String,
    /// Explicit slug override; the title is used when absent.
    pub slug: Option<String>,
    pub description: String,
    pub provider: Provider,
    pub video_url: String,
    pub published: bool,
}

/// Partial update for a work item: only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct WorkItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub provider: Option<Provider>,
    pub video_url: Option<String>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl WorkItemPatch {
    /// True when no field is supplied; such patches are rejected upstream.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.provider.is_none()
            && self.video_url.is_none()
            && self.published.is_none()
            && self.sort_order.is_none()
    }
}

/// Upper bound on slug collision retries before giving up.
const MAX_SLUG_ATTEMPTS: u32 = 100;

const SELECT_COLUMNS: &str =
    "id, works_page_id, title, slug, description, provider, video_url, published, sort_order";

/// Repository for work item operations.
pub struct WorkRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkRepository<'a> {
    /// Create a new work repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List work items ordered by sort key, optionally only published ones.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, published_only: bool) -> Result<Vec<WorkItem>, RepositoryError> {
        let works = sqlx::query_as::<_, WorkItem>(&format!(
            r"
            SELECT {SELECT_COLUMNS}
            FROM work_item
            WHERE works_page_id = $1 AND (NOT $2 OR published)
            ORDER BY sort_order ASC, id ASC
            "
        ))
        .bind(SINGLETON_ID)
        .bind(published_only)
        .fetch_all(self.pool)
        .await?;

        Ok(works)
    }

    /// Create a work item at the end of the list, assigning a unique slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if no free slug is found within
    /// the retry budget, `RepositoryError::Database` otherwise.
    pub async fn create(&self, new: &NewWorkItem) -> Result<WorkItem, RepositoryError> {
        self.ensure_parent().await?;

        let base = slug::base_slug(new.slug.as_deref().unwrap_or(&new.title));

        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let candidate = slug::candidate(&base, attempt);

            let result = sqlx::query_as::<_, WorkItem>(&format!(
                r"
                INSERT INTO work_item (
                    works_page_id, title, slug, description,
                    provider, video_url, published, sort_order
                )
                VALUES (
                    $1, $2, $3, $4, $5, $6, $7,
                    (SELECT COALESCE(MAX(sort_order), 0) + 10
                     FROM work_item WHERE works_page_id = $1)
                )
                RETURNING {SELECT_COLUMNS}
                "
            ))
            .bind(SINGLETON_ID)
            .bind(&new.title)
            .bind(&candidate)
            .bind(&new.description)
            .bind(new.provider)
            .bind(&new.video_url)
            .bind(new.published)
            .fetch_one(self.pool)
            .await;

            match result {
                Ok(work) => return Ok(work),
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    // Slug taken (possibly by a concurrent create); try the
                    // next suffix.
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(RepositoryError::Conflict(format!(
            "could not find a free slug for '{base}'"
        )))
    }

    /// Apply a partial update to a work item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id and
    /// `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: WorkItemId,
        patch: &WorkItemPatch,
    ) -> Result<WorkItem, RepositoryError> {
        let work = sqlx::query_as::<_, WorkItem>(&format!(
            r"
            UPDATE work_item SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                provider = COALESCE($4, provider),
                video_url = COALESCE($5, video_url),
                published = COALESCE($6, published),
                sort_order = COALESCE($7, sort_order)
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "
        ))
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.provider)
        .bind(patch.video_url.as_deref())
        .bind(patch.published)
        .bind(patch.sort_order)
        .fetch_optional(self.pool)
        .await?;

        work.ok_or(RepositoryError::NotFound)
    }

    /// Delete a work item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id and
    /// `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: WorkItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM work_item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Move a work item one position up or down by swapping sort keys with
    /// its neighbor. Returns `false` for boundary no-ops.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id and
    /// `RepositoryError::Database` if a query fails.
    pub async fn move_sibling(
        &self,
        id: WorkItemId,
        direction: Direction,
    ) -> Result<bool, RepositoryError> {
        let siblings = sqlx::query_as::<_, (i32, i32)>(
            r"
            SELECT id, sort_order
            FROM work_item
            WHERE works_page_id = $1
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
            sqlx::query("UPDATE work_item SET sort_order = $2 WHERE id = $1")
                .bind(record_id)
                .bind(new_order)
                .execute(self.pool)
                .await?;
        }

        Ok(true)
    }

    /// Insert the works page singleton with placeholder defaults when absent.
    async fn ensure_parent(&self) -> Result<(), RepositoryError> {
        let defaults = WorksPage::default();

        sqlx::query(
            r"
            INSERT INTO works_page (id, hero_title, hero_subtitle, banner_image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            ",
        )
        .bind(SINGLETON_ID)
        .bind(&defaults.hero_title)
        .bind(&defaults.hero_subtitle)
        .bind(&defaults.banner_image_url)
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
        assert!(WorkItemPatch::default().is_empty());

        let patch = WorkItemPatch {
            published: Some(false),
            ..WorkItemPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
