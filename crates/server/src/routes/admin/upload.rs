//! Admin media upload.

use axum::{Json, extract::Multipart, extract::State, response::IntoResponse};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use crate::upload::{mime_allowed, safe_ext};

/// Accept a media file and store it under the upload root.
///
/// POST /api/admin/upload (multipart, field `file`)
///
/// The stored name is a fresh UUID plus a vetted extension; the client's
/// filename is never used for path construction. Responds with the public
/// URL of the stored file.
#[instrument(skip(state, _admin, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        if !mime_allowed(content_type.as_deref()) {
            return Err(AppError::Validation("Unsupported file type.".to_owned()));
        }

        let ext = field.file_name().map(safe_ext).unwrap_or_default();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if bytes.len() > state.config().max_upload_bytes {
            return Err(AppError::Validation("File is too large.".to_owned()));
        }

        let filename = format!("{}{ext}", Uuid::new_v4());
        let dir = &state.config().upload_dir;

        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create upload directory");
            AppError::Internal("Failed to store file".to_owned())
        })?;

        tokio::fs::write(dir.join(&filename), &bytes)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to write uploaded file");
                AppError::Internal("Failed to store file".to_owned())
            })?;

        tracing::info!(filename = %filename, size = bytes.len(), "File uploaded");

        return Ok(Json(json!({ "url": format!("/uploads/{filename}") })));
    }

    Err(AppError::Validation("No file field in upload.".to_owned()))
}
