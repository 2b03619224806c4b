use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::push::PushError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Notification validation error: {0}")]
    DispatchValidation(String),

    #[error("Notification dispatch error: {0}")]
    Dispatch(#[from] PushError),

    #[error("Upload error: {0}")]
    Upload(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Each endpoint keeps its legacy error envelope, so the JSON shape
        // depends on the variant rather than a single shared schema.
        let (status, body) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::DispatchValidation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": msg }),
            ),
            AppError::Dispatch(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": e.to_string() }),
            ),
            AppError::Upload(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Upload failed", "details": e.to_string() }),
            ),
        };

        // Always log the detailed error server-side
        tracing::error!(
            status = %status.as_u16(),
            message = %self,
            "API error"
        );

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
