use serde::{Deserialize, Serialize};

/// A notification to deliver to one device.
#[derive(Debug, Clone)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    pub token: String,
}

/// Google service-account key (subset of the serviceAccount.json fields).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key: String,
    pub client_email: String,
    pub token_uri: String,
}

/// Cached OAuth2 access token.
#[derive(Debug, Clone)]
pub(crate) struct TokenCache {
    pub access_token: String,
    pub expires_at: i64,
}

/// JWT claims for the Google OAuth2 assertion.
#[derive(Debug, Serialize)]
pub(crate) struct JwtClaims {
    pub iss: String,
    pub sub: String,
    pub scope: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// FCM v1 message envelope.
#[derive(Debug, Serialize)]
pub(crate) struct FcmMessage {
    pub message: FcmMessageContent,
}

#[derive(Debug, Serialize)]
pub(crate) struct FcmMessageContent {
    pub token: String,
    pub notification: FcmNotification,
}

#[derive(Debug, Serialize)]
pub(crate) struct FcmNotification {
    pub title: String,
    pub body: String,
}

/// FCM v1 success response; `name` is the message id.
#[derive(Debug, Deserialize)]
pub(crate) struct FcmApiResponse {
    pub name: Option<String>,
}
