use serde::{Deserialize, Serialize};

/// Request body for `POST /send-notification`.
///
/// Fields deserialize as optional so an absent field gets the same
/// validation envelope as an empty one instead of a bare extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(rename = "fcmToken", default)]
    pub fcm_token: Option<String>,
}

/// Success envelope for `POST /send-notification`.
#[derive(Debug, Serialize)]
pub struct SendNotificationResponse {
    pub success: bool,
    /// Provider message id
    pub response: String,
}
