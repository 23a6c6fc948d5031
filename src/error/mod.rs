use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::assets::AssetRelayError;
use crate::render::RenderError;
use crate::template::TemplateStoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Template store error: {0}")]
    Store(#[from] TemplateStoreError),

    #[error("Asset relay error: {0}")]
    AssetRelay(#[from] AssetRelayError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

/// Redact internal detail from client-visible messages in production.
fn client_message(detail: &str, redacted: &str) -> String {
    if is_production() {
        redacted.to_string()
    } else {
        detail.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, client_msg, log_msg) = match &self {
            AppError::Config(e) => {
                let log = e.to_string();
                let client = client_message(&log, "Configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", client, log)
            }
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                msg.clone(),
            ),
            AppError::Render(e) => {
                // The engine's single error kind is a caller contract
                // violation, surfaced like any other validation failure.
                let msg = e.to_string();
                (StatusCode::BAD_REQUEST, "MISSING_MARKUP", msg.clone(), msg)
            }
            AppError::Store(TemplateStoreError::InvalidTemplate(msg)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_TEMPLATE",
                msg.clone(),
                msg.clone(),
            ),
            AppError::Store(TemplateStoreError::Database(e)) => {
                let log = e.to_string();
                let client = client_message(&log, "Template storage unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", client, log)
            }
            AppError::AssetRelay(AssetRelayError::Disabled) => {
                let msg = "Asset uploads are not configured".to_string();
                (StatusCode::SERVICE_UNAVAILABLE, "UPLOADS_DISABLED", msg.clone(), msg)
            }
            AppError::AssetRelay(e) => {
                let log = e.to_string();
                let client = client_message(&log, "Image upload failed");
                (StatusCode::BAD_GATEWAY, "UPLOAD_FAILED", client, log)
            }
            AppError::Internal(e) => {
                let log = e.clone();
                let client = client_message(&log, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", client, log)
            }
        };

        // Always log the detailed error server-side
        tracing::error!(
            code = %code,
            status = %status.as_u16(),
            message = %log_msg,
            "API error"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_msg,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
