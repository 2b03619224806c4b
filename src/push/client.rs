use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::models::*;
use super::{PushError, PushSender};

const OAUTH_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Firebase Cloud Messaging client.
///
/// Exchanges a service-account JWT for an OAuth2 access token, caches the
/// token until shortly before expiry, and posts messages to the v1 send
/// endpoint.
pub struct FcmClient {
    project_id: String,
    credentials: ServiceAccountKey,
    token_cache: Mutex<Option<TokenCache>>,
    http_client: reqwest::Client,
}

impl FcmClient {
    pub fn new(project_id: String, credentials: ServiceAccountKey) -> Self {
        Self {
            project_id,
            credentials,
            token_cache: Mutex::new(None),
            http_client: reqwest::Client::new(),
        }
    }

    /// Load credentials from a service-account JSON file.
    ///
    /// The project id defaults to the key file's `project_id` unless
    /// overridden in configuration.
    pub fn from_file(path: &str, project_override: Option<String>) -> Result<Self, PushError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PushError::Credentials(format!("{}: {}", path, e)))?;
        let credentials: ServiceAccountKey = serde_json::from_str(&contents)
            .map_err(|e| PushError::Credentials(format!("{}: {}", path, e)))?;

        let project_id = project_override.unwrap_or_else(|| credentials.project_id.clone());
        Ok(Self::new(project_id, credentials))
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Get an access token, refreshing when within 60s of expiry.
    async fn get_access_token(&self) -> Result<String, PushError> {
        {
            let cache = self.token_cache.lock().await;
            if let Some(cached) = cache.as_ref() {
                let now = Utc::now().timestamp();
                if cached.expires_at > now + 60 {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        // Sign a JWT with the service-account key and exchange it
        let now = Utc::now();
        let claims = JwtClaims {
            iss: self.credentials.client_email.clone(),
            sub: self.credentials.client_email.clone(),
            scope: OAUTH_SCOPE.to_string(),
            aud: self.credentials.token_uri.clone(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| PushError::KeyParse(e.to_string()))?;

        let assertion = encode(&Header::new(jsonwebtoken::Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| PushError::JwtEncode(e.to_string()))?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", &assertion),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| PushError::Token(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PushError::Token(format!(
                "token request failed with status {}",
                response.status()
            )));
        }

        let token_response: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| PushError::Token(e.to_string()))?;

        let expires_at = Utc::now().timestamp() + token_response.expires_in;
        {
            let mut cache = self.token_cache.lock().await;
            *cache = Some(TokenCache {
                access_token: token_response.access_token.clone(),
                expires_at,
            });
        }

        Ok(token_response.access_token)
    }
}

#[async_trait]
impl PushSender for FcmClient {
    async fn send(&self, message: &PushMessage) -> Result<String, PushError> {
        let access_token = self.get_access_token().await?;

        let envelope = FcmMessage {
            message: FcmMessageContent {
                token: message.token.clone(),
                notification: FcmNotification {
                    title: message.title.clone(),
                    body: message.body.clone(),
                },
            },
        };

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.project_id
        );

        tracing::debug!(project_id = %self.project_id, "Sending FCM notification");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| PushError::SendRequest(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let fcm_response: FcmApiResponse = response
                .json()
                .await
                .map_err(|e| PushError::ResponseParse(e.to_string()))?;

            Ok(fcm_response
                .name
                .unwrap_or_else(|| Uuid::new_v4().to_string()))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "FCM send rejected");
            Err(PushError::Api(status.to_string(), error_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> ServiceAccountKey {
        ServiceAccountKey {
            project_id: "test-project".to_string(),
            private_key: "not-a-key".to_string(),
            client_email: "test@test.iam.gserviceaccount.com".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = FcmClient::new("test-project".to_string(), test_credentials());
        assert_eq!(client.project_id(), "test-project");
    }

    #[test]
    fn test_project_override() {
        let client = FcmClient::new("override".to_string(), test_credentials());
        assert_eq!(client.project_id(), "override");
    }

    #[test]
    fn test_from_file_missing() {
        let result = FcmClient::from_file("./does-not-exist.json", None);
        assert!(matches!(result, Err(PushError::Credentials(_))));
    }

    #[test]
    fn test_invalid_private_key_rejected_before_network() {
        let client = FcmClient::new("test-project".to_string(), test_credentials());
        let result = tokio_test::block_on(client.get_access_token());
        assert!(matches!(result, Err(PushError::KeyParse(_))));
    }
}
