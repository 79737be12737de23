//! Photo field normalization for home sections.
//!
//! Sections carry two photo representations: a legacy single `photo_url`
//! column and a newer `photo_urls_json` column holding a JSON-encoded ordered
//! list. The list, when present and non-empty, takes precedence. This module
//! is the single normalization point between the stored columns and the
//! ordered list the renderers consume.

use serde::Serialize;

/// The photo representation attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhotoSet {
    /// No usable photo reference.
    Empty,
    /// Legacy single-URL representation.
    Single { url: String },
    /// Ordered gallery of URLs.
    Gallery { urls: Vec<String> },
}

impl PhotoSet {
    /// Build a photo set from the two stored columns.
    ///
    /// A parseable, non-empty JSON list wins; malformed JSON or an empty
    /// list falls back to the legacy URL; a blank legacy URL means no photo.
    #[must_use]
    pub fn from_columns(photo_urls_json: Option<&str>, photo_url: Option<&str>) -> Self {
        if let Some(raw) = photo_urls_json {
            let raw = raw.trim();
            if !raw.is_empty()
                && let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(raw)
            {
                let urls: Vec<String> = values
                    .into_iter()
                    .filter_map(|v| v.as_str().map(|s| s.trim().to_owned()))
                    .filter(|s| !s.is_empty())
                    .collect();
                if !urls.is_empty() {
                    return Self::Gallery { urls };
                }
            }
        }

        match photo_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Single {
                url: url.to_owned(),
            },
            _ => Self::Empty,
        }
    }

    /// The ordered URL list for rendering, regardless of stored form.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single { url } => vec![url.clone()],
            Self::Gallery { urls } => urls.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_takes_precedence() {
        let set = PhotoSet::from_columns(
            Some(r#"["/uploads/a.jpg", "/uploads/b.jpg"]"#),
            Some("/uploads/legacy.jpg"),
        );
        assert_eq!(
            set.urls(),
            vec!["/uploads/a.jpg".to_owned(), "/uploads/b.jpg".to_owned()]
        );
    }

    #[test]
    fn test_malformed_json_falls_back_to_legacy() {
        let set = PhotoSet::from_columns(Some("{not json"), Some("/uploads/legacy.jpg"));
        assert_eq!(
            set,
            PhotoSet::Single {
                url: "/uploads/legacy.jpg".to_owned()
            }
        );
    }

    #[test]
    fn test_empty_list_falls_back_to_legacy() {
        let set = PhotoSet::from_columns(Some("[]"), Some("/uploads/legacy.jpg"));
        assert_eq!(set.urls(), vec!["/uploads/legacy.jpg".to_owned()]);
    }

    #[test]
    fn test_blank_entries_filtered() {
        let set = PhotoSet::from_columns(Some(r#"["", "  ", "/uploads/a.jpg"]"#), None);
        assert_eq!(set.urls(), vec!["/uploads/a.jpg".to_owned()]);
    }

    #[test]
    fn test_nothing_stored() {
        let set = PhotoSet::from_columns(None, Some("   "));
        assert_eq!(set, PhotoSet::Empty);
        assert!(set.urls().is_empty());
    }
}
