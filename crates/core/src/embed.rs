//! Video embed resolution.
//!
//! Every page renderer that shows a video goes through [`resolve_embed`], so
//! provider dispatch and video-id extraction live in exactly one place.
//! Extraction failures never fail a render: a URL we cannot parse is passed
//! straight through as the embed source.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::Provider;

static VIMEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(\d+)").expect("valid vimeo pattern"));

/// How a resolved video should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    /// Native `<video>` element with controls.
    Native,
    /// Provider `<iframe>` player.
    Iframe,
}

/// A render-ready video embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub kind: EmbedKind,
    /// Source URL for the player element.
    pub src: String,
    /// Accessible title for iframe embeds.
    pub title: &'static str,
}

impl Embed {
    /// Whether this embed renders as a native `<video>` element.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.kind == EmbedKind::Native
    }
}

/// Resolve a stored provider + URL pair into a render strategy.
///
/// Returns `None` for a blank URL, which renderers show as a "no video"
/// placeholder.
#[must_use]
pub fn resolve_embed(provider: Provider, video_url: &str) -> Option<Embed> {
    let url = video_url.trim();
    if url.is_empty() {
        return None;
    }

    let embed = match provider {
        Provider::SelfHosted => Embed {
            kind: EmbedKind::Native,
            src: url.to_owned(),
            title: "Video",
        },
        Provider::Vimeo => Embed {
            kind: EmbedKind::Iframe,
            src: extract_vimeo_id(url)
                .map_or_else(|| url.to_owned(), |id| format!("https://player.vimeo.com/video/{id}")),
            title: "Vimeo video",
        },
        Provider::Youtube => Embed {
            kind: EmbedKind::Iframe,
            src: extract_youtube_id(url)
                .map_or_else(|| url.to_owned(), |id| format!("https://www.youtube.com/embed/{id}")),
            title: "YouTube video",
        },
    };

    Some(embed)
}

/// Extract a YouTube video id from a URL.
///
/// `youtu.be` hosts carry the id as the path segment; `youtube.com` hosts
/// carry it in the `v` query parameter. Anything else, including URLs that
/// do not parse at all, yields `None`.
#[must_use]
pub fn extract_youtube_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;

    if host.contains("youtu.be") {
        let id = url.path().trim_matches('/');
        if id.is_empty() {
            return None;
        }
        return Some(id.to_owned());
    }

    if host.contains("youtube.com") {
        return url
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned());
    }

    None
}

/// Extract a Vimeo video id (the numeric path segment) from a URL.
#[must_use]
pub fn extract_vimeo_id(input: &str) -> Option<String> {
    VIMEO_ID
        .captures(input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}
