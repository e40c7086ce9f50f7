use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://myportfolio-six-steel-86.vercel.app/api/contact";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Where contact messages are POSTed
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__CONTACT__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("contact.endpoint", DEFAULT_CONTACT_ENDPOINT)?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file just means defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.endpoint().map(|_| ())
    }

    /// Contact endpoint as an absolute http(s) URL
    pub fn endpoint(&self) -> Result<Url, String> {
        let url = Url::parse(&self.contact.endpoint)
            .map_err(|e| format!("Invalid contact endpoint {:?}: {}", self.contact.endpoint, e))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(format!(
                "Contact endpoint must use http or https, got {}",
                scheme
            )),
        }
    }
}
