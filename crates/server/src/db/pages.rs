//! Singleton page repository.
//!
//! Each page type has a fixed identity ([`SINGLETON_ID`]); `upsert_*` is a
//! create-or-replace keyed by that id and therefore idempotent.

use sqlx::PgPool;

use super::{RepositoryError, SINGLETON_ID};
use crate::models::{ContactsPage, HomePage, WorksPage};

/// Validated home page fields for an upsert.
#[derive(Debug, Clone)]
pub struct HomePageData {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub banner_image_url: String,
    pub director_name: String,
    pub director_role: String,
    pub director_avatar_url: String,
    pub intro_provider: montage_core::Provider,
    pub intro_video_url: String,
    pub about_title: String,
    pub about_html: String,
}

/// Validated hero fields for the works and contacts pages.
#[derive(Debug, Clone)]
pub struct HeroData {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub banner_image_url: String,
}

/// Repository for singleton page operations.
pub struct PageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PageRepository<'a> {
    /// Create a new page repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the home page singleton, if configured.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_home(&self) -> Result<Option<HomePage>, RepositoryError> {
        let page = sqlx::query_as::<_, HomePage>(
            r"
            SELECT id, hero_title, hero_subtitle, banner_image_url,
                   director_name, director_role, director_avatar_url,
                   intro_provider, intro_video_url, about_title, about_html
            FROM home_page
            WHERE id = $1
            ",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(self.pool)
        .await?;

        Ok(page)
    }

    /// Create or replace the home page singleton.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn upsert_home(&self, data: &HomePageData) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO home_page (
                id, hero_title, hero_subtitle, banner_image_url,
                director_name, director_role, director_avatar_url,
                intro_provider, intro_video_url, about_title, about_html
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                hero_title = EXCLUDED.hero_title,
                hero_subtitle = EXCLUDED.hero_subtitle,
                banner_image_url = EXCLUDED.banner_image_url,
                director_name = EXCLUDED.director_name,
                director_role = EXCLUDED.director_role,
                director_avatar_url = EXCLUDED.director_avatar_url,
                intro_provider = EXCLUDED.intro_provider,
                intro_video_url = EXCLUDED.intro_video_url,
                about_title = EXCLUDED.about_title,
                about_html = EXCLUDED.about_html
            ",
        )
        .bind(SINGLETON_ID)
        .bind(&data.hero_title)
        .bind(&data.hero_subtitle)
        .bind(&data.banner_image_url)
        .bind(&data.director_name)
        .bind(&data.director_role)
        .bind(&data.director_avatar_url)
        .bind(data.intro_provider)
        .bind(&data.intro_video_url)
        .bind(&data.about_title)
        .bind(&data.about_html)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Fetch the works page singleton, if configured.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_works_page(&self) -> Result<Option<WorksPage>, RepositoryError> {
        let page = sqlx::query_as::<_, WorksPage>(
            r"
            SELECT id, hero_title, hero_subtitle, banner_image_url
            FROM works_page
            WHERE id = $1
            ",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(self.pool)
        .await?;

        Ok(page)
    }

    /// Create or replace the works page singleton.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn upsert_works_page(&self, data: &HeroData) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO works_page (id, hero_title, hero_subtitle, banner_image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                hero_title = EXCLUDED.hero_title,
                hero_subtitle = EXCLUDED.hero_subtitle,
                banner_image_url = EXCLUDED.banner_image_url
            ",
        )
        .bind(SINGLETON_ID)
        .bind(&data.hero_title)
        .bind(&data.hero_subtitle)
        .bind(&data.banner_image_url)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Fetch the contacts page singleton, if configured.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_contacts_page(&self) -> Result<Option<ContactsPage>, RepositoryError> {
        let page = sqlx::query_as::<_, ContactsPage>(
            r"
            SELECT id, hero_title, hero_subtitle, banner_image_url
            FROM contacts_page
            WHERE id = $1
            ",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(self.pool)
        .await?;

        Ok(page)
    }

    /// Create or replace the contacts page singleton.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn upsert_contacts_page(&self, data: &HeroData) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO contacts_page (id, hero_title, hero_subtitle, banner_image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                hero_title = EXCLUDED.hero_title,
                hero_subtitle = EXCLUDED.hero_subtitle,
                banner_image_url = EXCLUDED.banner_image_url
            ",
        )
        .bind(SINGLETON_ID)
        .bind(&data.hero_title)
        .bind(&data.hero_subtitle)
        .bind(&data.banner_image_url)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
