//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `openweather`: upstream weather provider settings

mod openweather;
mod server;

use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

pub use openweather::OpenWeatherConfig;
pub use server::ServerConfig;

/// Application environment (development or production)
///
/// Controls how loudly configuration problems are reported at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed startup warnings
    #[default]
    Development,
    /// Production environment - configuration gaps are reported as warnings
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenWeatherMap provider configuration
    #[serde(default)]
    pub openweather: OpenWeatherConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, in order of increasing precedence:
    /// 1. Built-in defaults
    /// 2. `config.toml` in the working directory (optional)
    /// 3. Environment variables prefixed with `WEATHERPROXY`
    ///    (e.g. `WEATHERPROXY_SERVER_PORT`)
    ///
    /// `OPENWEATHER_API_KEY` is additionally honored as a direct fallback for
    /// the provider key, matching the original deployment contract.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., WEATHERPROXY_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("WEATHERPROXY")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.openweather.api_key.is_none()
            && let Ok(key) = std::env::var("OPENWEATHER_API_KEY")
            && !key.trim().is_empty()
        {
            config.openweather.api_key = Some(SecretString::from(key));
        }

        Ok(config)
    }

    /// Log configuration gaps that will surface at request time
    ///
    /// A missing API key is not fatal at startup; the handler rejects each
    /// request with a 500 until the key is configured.
    pub fn log_validation(&self) {
        if !self.openweather.has_api_key() {
            match self.environment {
                Environment::Production => {
                    warn!("OpenWeather API key is not configured; weather requests will fail");
                },
                Environment::Development => {
                    debug!("OpenWeather API key is not configured");
                },
            }
        }
    }
}
