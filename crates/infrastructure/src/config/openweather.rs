//! OpenWeatherMap provider configuration.

use integration_openweather::ForecastConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// OpenWeatherMap provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider API key (sensitive - uses `SecretString`)
    ///
    /// Usually supplied via the `OPENWEATHER_API_KEY` environment variable
    /// rather than the config file.
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl OpenWeatherConfig {
    /// The configured API key, if present and non-blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Whether a usable API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Convert to the forecast client's configuration
    #[must_use]
    pub fn to_client_config(&self) -> ForecastConfig {
        ForecastConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
