use crate::error::{config_error, env_error, BrodyResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Base URL of the planning backend when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the day preparation endpoint, relative to the base URL
pub const PREPARE_DAY_PATH: &str = "/api/prepare-day";

/// Default locale for display strings
pub const DEFAULT_LOCALE: &str = "en";

/// Optional configuration file, read relative to the working directory
pub const CONFIG_FILE: &str = "config/brody.toml";

/// Main configuration structure for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the planning backend
    pub api_url: String,
    /// Locale used for display strings
    pub locale: String,
    /// Per-request timeout in seconds; none means wait as long as the transport does
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Keys accepted in the configuration file; all optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
    locale: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from defaults, the config file, `.env` and the environment
    pub fn load() -> BrodyResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::default();

        if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            config.merge_toml(&content)?;
        }

        if let Ok(api_url) = env::var("BRODY_API_URL") {
            config.api_url = api_url;
        }

        if let Ok(locale) = env::var("BRODY_LOCALE") {
            config.locale = locale;
        }

        if let Ok(timeout) = env::var("BRODY_REQUEST_TIMEOUT_SECS") {
            let secs = timeout
                .parse::<u64>()
                .map_err(|_| env_error("BRODY_REQUEST_TIMEOUT_SECS", "expected whole seconds"))?;
            config.request_timeout_secs = Some(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Override fields with the ones present in a TOML document
    pub fn merge_toml(&mut self, content: &str) -> BrodyResult<()> {
        let file: FileConfig = toml::from_str(content)?;

        if let Some(api_url) = file.api_url {
            self.api_url = api_url;
        }
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if file.request_timeout_secs.is_some() {
            self.request_timeout_secs = file.request_timeout_secs;
        }

        Ok(())
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> BrodyResult<()> {
        self.endpoint_url()?;
        if self.locale.trim().is_empty() {
            return Err(config_error("locale must not be empty"));
        }
        Ok(())
    }

    /// Full URL of the day preparation endpoint
    pub fn endpoint_url(&self) -> BrodyResult<Url> {
        let base = Url::parse(&self.api_url)
            .map_err(|e| config_error(&format!("Invalid api_url '{}': {}", self.api_url, e)))?;

        if base.cannot_be_a_base() {
            return Err(config_error(&format!(
                "api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }

        base.join(PREPARE_DAY_PATH)
            .map_err(|e| config_error(&format!("Failed to build endpoint URL: {}", e)))
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_local_backend() {
        let config = Config::default();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://localhost:8000/api/prepare-day"
        );
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn endpoint_replaces_base_path() {
        let config = Config {
            api_url: "http://127.0.0.1:9000/ignored/".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:9000/api/prepare-day"
        );
    }

    #[test]
    fn invalid_url_is_config_error() {
        let config = Config {
            api_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn toml_overrides_only_present_keys() {
        let mut config = Config::default();
        config
            .merge_toml("locale = \"fi\"\nrequest_timeout_secs = 5\n")
            .unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.locale, "fi");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn malformed_toml_is_serialization_error() {
        let mut config = Config::default();
        let result = config.merge_toml("request_timeout_secs = \"soon\"");
        assert!(matches!(result, Err(crate::error::Error::Serialization(_))));
    }
}
