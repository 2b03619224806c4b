use bytes::Bytes;
use serde::Deserialize;

/// One file parsed out of a multipart request.
///
/// Lives for the duration of the request; the buffer is dropped when the
/// handler returns on any path.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Bytes,
    pub filename: String,
    pub content_type: String,
}

impl UploadRequest {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Provider-native upload result (unknown provider fields are ignored).
///
/// `format` is absent for raw uploads; `duration`/`width`/`height` only
/// apply to some media types.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredAsset {
    pub secure_url: String,
    pub public_id: String,
    pub format: Option<String>,
    pub resource_type: String,
    pub bytes: u64,
    pub duration: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Provider error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorResponse {
    pub error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub message: String,
}
