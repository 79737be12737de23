//! Serving of uploaded media files.
//!
//! Files live under the configured upload root with UUID base names. The
//! request path is validated before it ever touches path construction: a
//! `..` segment or an absolute path is a 400, not a lookup.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::upload;

/// Uploaded files never change once written, so clients may cache forever.
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Serve an uploaded file.
///
/// GET /uploads/{*path}
#[instrument(skip(state))]
pub async fn serve(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    if !is_safe_path(&path) {
        return Err(AppError::BadRequest("Invalid path.".to_owned()));
    }

    let full_path = state.config().upload_dir.join(&path);

    let bytes = match tokio::fs::read(&full_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path, "Failed to read uploaded file");
            return Err(AppError::Internal("Failed to read file".to_owned()));
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, upload::content_type_for(&path)),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        bytes,
    )
        .into_response())
}

/// Reject path traversal before any filesystem access.
fn is_safe_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && !path.split('/').any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_paths() {
        assert!(is_safe_path("abc123.jpg"));
        assert!(is_safe_path("nested/dir/file.png"));
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(!is_safe_path("../secret"));
        assert!(!is_safe_path("a/../../etc/passwd"));
        assert!(!is_safe_path("/etc/passwd"));
        assert!(!is_safe_path("a\\..\\b"));
        assert!(!is_safe_path(""));
    }
}
