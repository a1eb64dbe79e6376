use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::enhance::EnhanceError;
use crate::export::ExportError;
use crate::models::section::UnknownSection;
use crate::resume::mutation::MutationError;
use crate::resume::photo::PhotoError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Enhancement error: {0}")]
    Enhancement(String),

    #[error("Enhancement unavailable")]
    EnhancementUnavailable,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Message shown to users when the rewrite backend fails.
pub const ENHANCE_FAILURE_MESSAGE: &str = "Failed to enhance content with AI. Please try again.";

impl From<MutationError> for AppError {
    fn from(err: MutationError) -> Self {
        match err {
            MutationError::EntryNotFound { .. } => AppError::NotFound(err.to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<UnknownSection> for AppError {
    fn from(err: UnknownSection) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<EnhanceError> for AppError {
    fn from(err: EnhanceError) -> Self {
        match err {
            EnhanceError::EmptyContent => AppError::Validation(err.to_string()),
            EnhanceError::Unavailable => AppError::EnhancementUnavailable,
            EnhanceError::Backend(msg) => AppError::Enhancement(msg),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Enhancement(msg) => {
                tracing::error!("Enhancement error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ENHANCEMENT_ERROR",
                    ENHANCE_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::EnhancementUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ENHANCEMENT_UNAVAILABLE",
                "AI enhancement is not configured".to_string(),
            ),
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The PDF could not be generated".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
