//! Binary media upload to the Cloudinary storage provider.
//!
//! The upload API takes a signed multipart POST; the signature is a SHA-1
//! digest over the sorted option parameters plus the API secret.

mod client;
mod models;
mod sign;

pub use client::CloudinaryStore;
pub use models::{StoredAsset, UploadRequest};

use async_trait::async_trait;
use thiserror::Error;

use crate::media::UploadOptions;

/// Errors from the storage provider.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload request failed: {0}")]
    Request(String),

    #[error("{0}")]
    Provider(String),

    #[error("Failed to parse upload response: {0}")]
    ResponseParse(String),
}

/// Backend trait for media storage.
///
/// Handlers receive this as an explicit dependency object; tests substitute
/// an in-process fake.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload one file with the computed options. The buffer is streamed
    /// into the request body, never written to disk.
    async fn upload(
        &self,
        file: UploadRequest,
        options: &UploadOptions,
    ) -> Result<StoredAsset, StorageError>;
}
