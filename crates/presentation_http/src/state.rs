//! Application state shared across handlers

use std::sync::Arc;

use infrastructure::AppConfig;
use integration_openweather::ForecastClient;

/// Shared application state
///
/// The forecast client and configuration are injected here so handlers never
/// reach for ambient global state, keeping them deterministic under test.
#[derive(Clone)]
pub struct AppState {
    /// Forecast client for the upstream call
    pub forecast_client: Arc<dyn ForecastClient>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("forecast_client", &"<ForecastClient>")
            .field("config", &self.config)
            .finish()
    }
}
