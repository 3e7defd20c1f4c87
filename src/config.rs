use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the FileStore backend.
    pub base_url: String,
    /// Credentials for the demo session; unauthenticated when absent.
    pub login: Option<String>,
    pub password: Option<String>,
    /// Directory downloaded files are written into.
    pub download_dir: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            login: None,
            password: None,
            download_dir: "./downloads".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = std::env::var("FILESTORE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let login = std::env::var("FILESTORE_LOGIN").ok();
        let password = std::env::var("FILESTORE_PASSWORD").ok();

        let download_dir =
            std::env::var("DOWNLOAD_DIR").unwrap_or_else(|_| "./downloads".to_string());

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let config = Config {
            base_url,
            login,
            password,
            download_dir,
            request_timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "FILESTORE_URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        if self.login.is_some() != self.password.is_some() {
            return Err(ConfigError::ValidationError(
                "FILESTORE_LOGIN and FILESTORE_PASSWORD must be set together".to_string(),
            ));
        }

        Ok(())
    }
}
