//! HTTP request handlers.
//!
//! Both handlers are independent relays: they validate input, make a single
//! awaited provider call, and convert the outcome into the endpoint's JSON
//! envelope. No retries on either path (notification sends are not
//! idempotent).

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::media::{MediaKind, UploadOptions, UploadResult};
use crate::push::PushMessage;
use crate::server::AppState;
use crate::storage::UploadRequest;

use super::models::{SendNotificationRequest, SendNotificationResponse};

/// Plain-text liveness probe.
pub async fn liveness() -> &'static str {
    "Notification Server Running"
}

/// Forward a `{title, body, fcmToken}` notification to the push provider.
#[tracing::instrument(name = "http.send_notification", skip(state, request))]
pub async fn send_notification(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<SendNotificationResponse>> {
    let message = PushMessage {
        title: require_field("title", request.title)?,
        body: require_field("body", request.body)?,
        token: require_field("fcmToken", request.fcm_token)?,
    };

    let message_id = state.push.send(&message).await?;
    tracing::info!(message_id = %message_id, "Notification dispatched");

    Ok(Json(SendNotificationResponse {
        success: true,
        response: message_id,
    }))
}

/// Missing and empty fields get the same validation envelope.
fn require_field(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::DispatchValidation(format!("{} is required", name))),
    }
}

/// Upload a single multipart file to the storage provider and return the
/// normalized result.
#[tracing::instrument(name = "http.upload", skip_all)]
pub async fn upload_media(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResult>> {
    let file = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let kind = MediaKind::classify(&file.content_type);
    let options = UploadOptions::for_kind(kind);

    tracing::info!(
        filename = %file.filename,
        content_type = %file.content_type,
        size = file.len(),
        folder = options.folder,
        resource_type = options.resource_type.as_str(),
        "Processing media upload"
    );

    let asset = state.media.upload(file, &options).await?;

    Ok(Json(UploadResult::from_asset(kind, asset)))
}

/// Pull the first field named `file` out of the multipart stream.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadRequest>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        return Ok(Some(UploadRequest {
            data,
            filename,
            content_type,
        }));
    }

    Ok(None)
}
