mod settings;

pub use settings::{CloudinaryConfig, FcmConfig, ServerConfig, Settings, UploadConfig};
