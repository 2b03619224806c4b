use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fcm: FcmConfig,
    pub cloudinary: CloudinaryConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmConfig {
    /// Path to the Google service-account JSON file
    #[serde(default = "default_credentials_path")]
    pub credentials: String,
    /// Firebase project id; falls back to the service-account file's project_id
    pub project: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudinaryConfig {
    pub cloud: String,
    pub key: String,
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Request body cap in bytes, enforced before the handler runs
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_credentials_path() -> String {
    "./serviceAccount.json".to_string()
}

fn default_max_bytes() -> usize {
    50 * 1024 * 1024 // 50 MiB
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("fcm.credentials", "./serviceAccount.json")?
            .set_default("upload.max_bytes", default_max_bytes() as u64)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, CLOUDINARY_CLOUD, FCM_CREDENTIALS, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            credentials: default_credentials_path(),
            project: None,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}
