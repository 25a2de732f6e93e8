//! OpenWeatherMap forecast client
//!
//! HTTP client for the OpenWeatherMap forecast endpoint.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Forecast client errors
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The outbound request URL could not be constructed
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Forecast client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// OpenWeatherMap API base URL (default: <http://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Forecast client trait for fetching raw forecast data
///
/// Implementations make exactly one outbound call per invocation and return
/// the upstream body as text, unmodified. The API key is passed per call so
/// that callers can validate its presence before any request is attempted.
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the raw forecast JSON for a city, in metric units.
    async fn fetch_by_city(&self, city: &str, api_key: &str) -> Result<String, ForecastError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: ForecastConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ForecastError> {
        Self::new(ForecastConfig::default())
    }

    /// Build the API URL for a forecast request
    ///
    /// Parameter order is fixed: `q`, `appid`, `units`. City and key are
    /// percent-encoded, so a city value cannot inject extra query parameters.
    fn build_forecast_url(&self, city: &str, api_key: &str) -> Result<Url, ForecastError> {
        Url::parse_with_params(
            &format!("{}/forecast", self.config.base_url),
            [("q", city), ("appid", api_key), ("units", "metric")],
        )
        .map_err(|e| ForecastError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl ForecastClient for OpenWeatherClient {
    #[instrument(skip(self, api_key), fields(city = %city))]
    async fn fetch_by_city(&self, city: &str, api_key: &str) -> Result<String, ForecastError> {
        let url = self.build_forecast_url(city, api_key)?;

        debug!("Fetching weather forecast");

        // Errors are stripped of their URL so the API key never reaches
        // logs or client-visible messages.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ForecastError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ForecastError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ForecastError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ForecastError::RequestFailed(e.without_url().to_string()))
    }
}
