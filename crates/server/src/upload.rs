//! Upload validation helpers.
//!
//! Uploaded files are stored under a UUID name so the original filename
//! never reaches the filesystem. Only the extension survives, and only
//! when it is plain lowercase alphanumerics.

use std::path::Path;

/// MIME types accepted for upload.
///
/// The empty string matches parts that carry no content type at all.
const ALLOWED_MIME_PREFIXES: &[&str] = &["image/", "video/"];
const ALLOWED_MIME_EXACT: &[&str] = &["application/octet-stream", ""];

/// Whether a multipart content type is acceptable.
#[must_use]
pub fn mime_allowed(content_type: Option<&str>) -> bool {
    let Some(ct) = content_type else {
        return true;
    };
    let ct = ct.trim().to_ascii_lowercase();

    ALLOWED_MIME_EXACT.contains(&ct.as_str())
        || ALLOWED_MIME_PREFIXES
            .iter()
            .any(|prefix| ct.starts_with(prefix))
}

/// Extract a safe extension from an uploaded filename.
///
/// Returns the extension with its leading dot when it is 1 to 9 lowercase
/// alphanumerics (at most 10 characters including the dot), or an empty
/// string otherwise. The stored file then has no extension rather than a
/// dangerous one.
#[must_use]
pub fn safe_ext(filename: &str) -> String {
    let Some(ext) = Path::new(filename).extension().and_then(|e| e.to_str()) else {
        return String::new();
    };

    let ext = ext.to_ascii_lowercase();
    if ext.is_empty() || ext.len() > 9 || !ext.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
        return String::new();
    }

    format!(".{ext}")
}

/// Content type for a stored file, keyed on its extension.
///
/// Unknown extensions fall back to `application/octet-stream`.
#[must_use]
pub fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_allowed_images_and_videos() {
        assert!(mime_allowed(Some("image/png")));
        assert!(mime_allowed(Some("image/svg+xml")));
        assert!(mime_allowed(Some("video/mp4")));
        assert!(mime_allowed(Some("application/octet-stream")));
        assert!(mime_allowed(None));
        assert!(mime_allowed(Some("")));
    }

    #[test]
    fn test_mime_rejected_for_other_types() {
        assert!(!mime_allowed(Some("text/html")));
        assert!(!mime_allowed(Some("application/javascript")));
        assert!(!mime_allowed(Some("application/x-sh")));
    }

    #[test]
    fn test_safe_ext_keeps_plain_extensions() {
        assert_eq!(safe_ext("photo.JPG"), ".jpg");
        assert_eq!(safe_ext("clip.webm"), ".webm");
        assert_eq!(safe_ext("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_safe_ext_drops_suspicious_extensions() {
        assert_eq!(safe_ext("noext"), "");
        assert_eq!(safe_ext("weird.ext!"), "");
        assert_eq!(safe_ext("too.muchtoolong1"), "");
        assert_eq!(safe_ext("dot."), "");
    }

    #[test]
    fn test_content_type_for_known_and_unknown() {
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("b.svg"), "image/svg+xml");
        assert_eq!(content_type_for("c.mov"), "video/quicktime");
        assert_eq!(content_type_for("d.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
