//! Singleton page records.
//!
//! Each page type has a fixed identity of 1 and at most one row. The
//! `Default` impls carry the built-in placeholder content the admin API
//! returns while a page has not been configured yet.

use montage_core::Provider;
use serde::Serialize;
use sqlx::FromRow;

use crate::db::SINGLETON_ID;

/// The home page singleton: hero banner, director card, intro video, about block.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub id: i32,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub banner_image_url: String,
    pub director_name: String,
    pub director_role: String,
    pub director_avatar_url: String,
    pub intro_provider: Provider,
    pub intro_video_url: String,
    pub about_title: String,
    pub about_html: String,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            hero_title: "Video Editor & Director".to_owned(),
            hero_subtitle: "Story-driven editing for brands, artists, and documentaries"
                .to_owned(),
            banner_image_url: "/uploads/banner.jpg".to_owned(),
            director_name: "John Doe".to_owned(),
            director_role: "Video Editor / Director".to_owned(),
            director_avatar_url: "/uploads/avatar.jpg".to_owned(),
            intro_provider: Provider::Youtube,
            intro_video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_owned(),
            about_title: "About".to_owned(),
            about_html: "<p>Write a short director statement here.</p>".to_owned(),
        }
    }
}

/// The works page singleton: hero banner only.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorksPage {
    pub id: i32,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub banner_image_url: String,
}

impl Default for WorksPage {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            hero_title: "Work".to_owned(),
            hero_subtitle: "Selected projects and edits".to_owned(),
            banner_image_url: "/uploads/works-banner.jpg".to_owned(),
        }
    }
}

/// The contacts page singleton: hero banner only.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactsPage {
    pub id: i32,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub banner_image_url: String,
}

impl Default for ContactsPage {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            hero_title: "Contact".to_owned(),
            hero_subtitle: "Tell me about your project.".to_owned(),
            banner_image_url: "/uploads/contacts-banner.jpg".to_owned(),
        }
    }
}
