use std::sync::Arc;

use crate::config::Settings;
use crate::error::Result;
use crate::push::{FcmClient, PushSender};
use crate::storage::{CloudinaryStore, MediaStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub push: Arc<dyn PushSender>,
    pub media: Arc<dyn MediaStore>,
}

impl AppState {
    /// Build the real provider clients from configuration.
    ///
    /// Fails if the service-account file cannot be read, so credential
    /// problems surface at startup instead of on the first request.
    pub fn new(settings: Settings) -> Result<Self> {
        let push = Arc::new(FcmClient::from_file(
            &settings.fcm.credentials,
            settings.fcm.project.clone(),
        )?);
        let media = Arc::new(CloudinaryStore::new(&settings.cloudinary));
        Ok(Self::with_providers(settings, push, media))
    }

    /// Construct state with injected provider objects (used by tests).
    pub fn with_providers(
        settings: Settings,
        push: Arc<dyn PushSender>,
        media: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            push,
            media,
        }
    }
}
