//! Asset upload endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::assets::UploadedAsset;
use crate::error::{AppError, Result};
use crate::metrics::UploadMetrics;
use crate::server::AppState;

/// Multipart field carrying the binary.
const IMAGE_FIELD: &str = "image";

/// POST /api/v1/assets/images - Relay an image to object storage
///
/// Accepts a multipart form with an `image` field and responds with the
/// stable URL the relay minted. The URL is opaque; the editor embeds it
/// into a markup fragment before that fragment is stored or rendered.
#[tracing::instrument(name = "http.upload_image", skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedAsset>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {}", e)))?;

        let size = bytes.len();
        let asset = match state
            .asset_relay
            .upload(&filename, &content_type, bytes.to_vec())
            .await
        {
            Ok(asset) => asset,
            Err(e) => {
                UploadMetrics::record_failure();
                return Err(e.into());
            }
        };

        UploadMetrics::record_success(size);
        return Ok(Json(asset));
    }

    Err(AppError::Validation("no file uploaded".to_string()))
}
