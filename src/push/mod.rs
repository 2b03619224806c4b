//! Push notification dispatch via Firebase Cloud Messaging (HTTP v1 API).
//!
//! Handles OAuth2 access-token generation from a Google service account,
//! token caching with refresh, and single-message delivery.

mod client;
mod models;

pub use client::FcmClient;
pub use models::{PushMessage, ServiceAccountKey};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the push provider or its auth flow.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("Failed to read service account: {0}")]
    Credentials(String),

    #[error("Failed to parse private key: {0}")]
    KeyParse(String),

    #[error("Failed to encode JWT: {0}")]
    JwtEncode(String),

    #[error("Failed to get access token: {0}")]
    Token(String),

    #[error("FCM send request failed: {0}")]
    SendRequest(String),

    #[error("Failed to parse FCM response: {0}")]
    ResponseParse(String),

    #[error("FCM API error: {0} - {1}")]
    Api(String, String),
}

/// Backend trait for push dispatch.
///
/// Handlers receive this as an explicit dependency object; tests substitute
/// an in-process fake.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Send a single notification. Returns the provider message id.
    ///
    /// One attempt per call; sending is not idempotent, so no retries.
    async fn send(&self, message: &PushMessage) -> Result<String, PushError>;
}
