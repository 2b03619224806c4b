use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};

use crate::config::CloudinaryConfig;
use crate::media::UploadOptions;

use super::models::ProviderErrorResponse;
use super::sign::sign_request;
use super::{MediaStore, StorageError, StoredAsset, UploadRequest};

const UPLOAD_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary upload client.
pub struct CloudinaryStore {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    http_client: reqwest::Client,
}

impl CloudinaryStore {
    pub fn new(config: &CloudinaryConfig) -> Self {
        Self {
            cloud_name: config.cloud.clone(),
            api_key: config.key.clone(),
            api_secret: config.secret.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Option parameters that participate in the request signature.
    fn signed_params(options: &UploadOptions, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("folder", options.folder.to_string()),
            ("timestamp", timestamp.to_string()),
        ];
        if let Some(quality) = options.quality {
            params.push(("quality", quality.to_string()));
        }
        if let Some(format) = options.format {
            params.push(("format", format.to_string()));
        }
        if let Some(fetch_format) = options.fetch_format {
            params.push(("fetch_format", fetch_format.to_string()));
        }
        params
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(
        &self,
        file: UploadRequest,
        options: &UploadOptions,
    ) -> Result<StoredAsset, StorageError> {
        let timestamp = Utc::now().timestamp();
        let params = Self::signed_params(options, timestamp);
        let signature = sign_request(&params, &self.api_secret);

        let file_part = Part::stream(file.data)
            .file_name(file.filename)
            .mime_str(&file.content_type)
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let mut form = Form::new().part("file", file_part);
        for (key, value) in params {
            form = form.text(key, value);
        }
        form = form
            .text("api_key", self.api_key.clone())
            .text("signature", signature);

        let url = format!(
            "{}/{}/{}/upload",
            UPLOAD_BASE,
            self.cloud_name,
            options.resource_type.as_str()
        );

        tracing::debug!(
            folder = options.folder,
            resource_type = options.resource_type.as_str(),
            "Uploading media to storage provider"
        );

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<StoredAsset>()
                .await
                .map_err(|e| StorageError::ResponseParse(e.to_string()))
        } else {
            let body = response
                .text()
                .await
                .map_err(|e| StorageError::Request(e.to_string()))?;
            let message = serde_json::from_str::<ProviderErrorResponse>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            tracing::warn!(status = %status, "Storage provider rejected upload");
            Err(StorageError::Provider(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn store() -> CloudinaryStore {
        CloudinaryStore::new(&CloudinaryConfig {
            cloud: "demo".to_string(),
            key: "key".to_string(),
            secret: "secret".to_string(),
        })
    }

    #[test]
    fn test_signed_params_include_options() {
        let options = UploadOptions::for_kind(MediaKind::Video);
        let params = CloudinaryStore::signed_params(&options, 42);
        assert!(params.contains(&("folder", "chat_app_videos".to_string())));
        assert!(params.contains(&("timestamp", "42".to_string())));
        assert!(params.contains(&("quality", "auto".to_string())));
        assert!(params.contains(&("format", "mp4".to_string())));
        assert!(!params.iter().any(|(key, _)| *key == "fetch_format"));
    }

    #[test]
    fn test_signed_params_bare_for_documents() {
        let options = UploadOptions::for_kind(MediaKind::Document);
        let params = CloudinaryStore::signed_params(&options, 42);
        assert_eq!(
            params,
            vec![
                ("folder", "chat_app_documents".to_string()),
                ("timestamp", "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_upload_url_uses_resource_type() {
        let client = store();
        let options = UploadOptions::for_kind(MediaKind::Audio);
        let url = format!(
            "{}/{}/{}/upload",
            UPLOAD_BASE,
            client.cloud_name,
            options.resource_type.as_str()
        );
        assert_eq!(url, "https://api.cloudinary.com/v1_1/demo/video/upload");
    }
}
