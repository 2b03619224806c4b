use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::handlers::{liveness, send_notification, upload_media};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Liveness
        .route("/", get(liveness))
        // Notification dispatch
        .route("/send-notification", post(send_notification))
        // Media upload
        .route("/upload", post(upload_media))
}
