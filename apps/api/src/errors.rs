use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;

/// Request-level failures. Every variant aborts the request with
/// `{"error": <message>}`; analyzer failures never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing multipart field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid multipart request: {0}")]
    InvalidForm(#[from] MultipartRejection),

    #[error("Multipart read error: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingField(_) | AppError::InvalidForm(_) | AppError::Multipart(_) => {
                tracing::error!("Rejected upload: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The raw message goes back to the client, extraction failures included.
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
