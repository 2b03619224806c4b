//! API layer - HTTP endpoint handlers.

mod handlers;
mod models;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use handlers::{liveness, send_notification, upload_media};
pub use models::{SendNotificationRequest, SendNotificationResponse};
pub use routes::api_routes;
