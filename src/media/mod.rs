//! Media classification and upload-result normalization.
//!
//! Every upload is classified once by MIME prefix into a [`MediaKind`];
//! the storage folder, provider resource-type, extra upload options, and
//! the legacy alias field in the response are all derived from that single
//! value so the branching logic lives in one place.

use serde::Serialize;

use crate::storage::StoredAsset;

/// Media category derived from the declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

/// Provider-side resource-type tag controlling how an asset is processed.
///
/// The provider also accepts `auto`, but classification is total here so it
/// is never needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Image,
    Video,
    Raw,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
        }
    }
}

impl MediaKind {
    /// Classify a MIME type string, first match wins.
    pub fn classify(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else if mime.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Document
        }
    }

    pub fn folder(&self) -> &'static str {
        match self {
            MediaKind::Image => "chat_app_images",
            MediaKind::Video => "chat_app_videos",
            MediaKind::Audio => "chat_app_audio",
            MediaKind::Document => "chat_app_documents",
        }
    }

    /// Provider quirk: audio files are stored under the `video` resource type.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            MediaKind::Image => ResourceType::Image,
            MediaKind::Video | MediaKind::Audio => ResourceType::Video,
            MediaKind::Document => ResourceType::Raw,
        }
    }
}

/// Provider upload configuration, derived deterministically from the
/// classified media kind. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub folder: &'static str,
    pub resource_type: ResourceType,
    pub quality: Option<&'static str>,
    pub format: Option<&'static str>,
    pub fetch_format: Option<&'static str>,
}

impl UploadOptions {
    pub fn for_kind(kind: MediaKind) -> Self {
        let mut options = Self {
            folder: kind.folder(),
            resource_type: kind.resource_type(),
            quality: None,
            format: None,
            fetch_format: None,
        };

        match kind {
            MediaKind::Image => {
                options.quality = Some("auto");
                options.fetch_format = Some("auto");
            }
            MediaKind::Video => {
                options.quality = Some("auto");
                // Convert to MP4 for playback compatibility
                options.format = Some("mp4");
            }
            MediaKind::Audio | MediaKind::Document => {}
        }

        options
    }
}

/// Normalized upload response, merging provider fields with generic and
/// legacy-compatible URL aliases.
///
/// At most one legacy alias (`imageUrl`/`videoUrl`/`audioUrl`) is populated,
/// selected by the original MIME classification; documents carry none.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub url: String,
    pub media_url: String,
    pub public_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub resource_type: String,
    pub bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl UploadResult {
    /// Build the response from the provider result.
    ///
    /// The alias is keyed off `kind` (the original MIME classification),
    /// not the provider resource-type label, so audio uploads stored under
    /// `video` still get `audioUrl`.
    pub fn from_asset(kind: MediaKind, asset: StoredAsset) -> Self {
        let url = asset.secure_url;

        let mut result = Self {
            media_url: url.clone(),
            public_id: asset.public_id,
            format: asset.format,
            resource_type: asset.resource_type,
            bytes: asset.bytes,
            duration: asset.duration,
            width: asset.width,
            height: asset.height,
            image_url: None,
            video_url: None,
            audio_url: None,
            url,
        };

        match kind {
            MediaKind::Image => result.image_url = Some(result.url.clone()),
            MediaKind::Video => result.video_url = Some(result.url.clone()),
            MediaKind::Audio => result.audio_url = Some(result.url.clone()),
            MediaKind::Document => {}
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(url: &str) -> StoredAsset {
        StoredAsset {
            secure_url: url.to_string(),
            public_id: "chat_app_images/abc123".to_string(),
            format: Some("jpg".to_string()),
            resource_type: "image".to_string(),
            bytes: 2048,
            duration: None,
            width: Some(640),
            height: Some(480),
        }
    }

    #[test]
    fn test_classify_by_prefix() {
        assert_eq!(MediaKind::classify("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::classify("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("audio/ogg"), MediaKind::Audio);
        assert_eq!(MediaKind::classify("application/pdf"), MediaKind::Document);
        assert_eq!(MediaKind::classify("text/plain"), MediaKind::Document);
        assert_eq!(MediaKind::classify(""), MediaKind::Document);
    }

    #[test]
    fn test_audio_stored_under_video_resource_type() {
        assert_eq!(MediaKind::Audio.resource_type(), ResourceType::Video);
        assert_eq!(MediaKind::Audio.folder(), "chat_app_audio");
    }

    #[test]
    fn test_image_options() {
        let options = UploadOptions::for_kind(MediaKind::Image);
        assert_eq!(options.folder, "chat_app_images");
        assert_eq!(options.resource_type, ResourceType::Image);
        assert_eq!(options.quality, Some("auto"));
        assert_eq!(options.fetch_format, Some("auto"));
        assert_eq!(options.format, None);
    }

    #[test]
    fn test_video_options_request_mp4() {
        let options = UploadOptions::for_kind(MediaKind::Video);
        assert_eq!(options.folder, "chat_app_videos");
        assert_eq!(options.resource_type, ResourceType::Video);
        assert_eq!(options.quality, Some("auto"));
        assert_eq!(options.format, Some("mp4"));
        assert_eq!(options.fetch_format, None);
    }

    #[test]
    fn test_audio_and_document_options_have_no_hints() {
        let audio = UploadOptions::for_kind(MediaKind::Audio);
        assert_eq!(audio.quality, None);
        assert_eq!(audio.format, None);
        assert_eq!(audio.fetch_format, None);

        let document = UploadOptions::for_kind(MediaKind::Document);
        assert_eq!(document.folder, "chat_app_documents");
        assert_eq!(document.resource_type, ResourceType::Raw);
        assert_eq!(document.quality, None);
    }

    #[test]
    fn test_image_alias() {
        let result = UploadResult::from_asset(MediaKind::Image, asset("https://cdn/img.jpg"));
        assert_eq!(result.image_url.as_deref(), Some("https://cdn/img.jpg"));
        assert_eq!(result.image_url.as_ref(), Some(&result.url));
        assert!(result.video_url.is_none());
        assert!(result.audio_url.is_none());
    }

    #[test]
    fn test_audio_alias_keyed_off_mime_not_resource_type() {
        let mut stored = asset("https://cdn/voice.mp3");
        stored.resource_type = "video".to_string();
        let result = UploadResult::from_asset(MediaKind::Audio, stored);
        assert_eq!(result.audio_url.as_ref(), Some(&result.url));
        assert!(result.video_url.is_none());
        assert_eq!(result.resource_type, "video");
    }

    #[test]
    fn test_document_has_no_alias() {
        let result = UploadResult::from_asset(MediaKind::Document, asset("https://cdn/note.pdf"));
        assert!(result.image_url.is_none());
        assert!(result.video_url.is_none());
        assert!(result.audio_url.is_none());
        assert_eq!(result.media_url, result.url);
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let mut stored = asset("https://cdn/note.pdf");
        stored.format = None;
        stored.width = None;
        stored.height = None;
        let result = UploadResult::from_asset(MediaKind::Document, stored);

        let json = serde_json::to_value(&result).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("url"));
        assert!(object.contains_key("mediaUrl"));
        assert!(object.contains_key("publicId"));
        assert!(!object.contains_key("format"));
        assert!(!object.contains_key("width"));
        assert!(!object.contains_key("imageUrl"));
        assert!(!object.contains_key("videoUrl"));
        assert!(!object.contains_key("audioUrl"));
    }
}
