//! API error handling
//!
//! Each terminal error state of the proxy maps to a fixed HTTP status and a
//! plain-text body. The bodies are part of the inbound contract and are
//! returned byte for byte.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_openweather::ForecastError;
use thiserror::Error;

/// Terminal error states of a proxy invocation
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The caller supplied no usable city in query or body (400)
    #[error("Please pass a city name on the query string or in the request body")]
    MissingCity,

    /// The provider API key is missing from server configuration (500)
    #[error("OpenWeather API key is not configured.")]
    ApiKeyNotConfigured,

    /// The upstream call failed: network error, timeout, or non-2xx (500)
    #[error("Error fetching weather data: {0}")]
    Upstream(#[from] ForecastError),
}

impl ProxyError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::ApiKeyNotConfigured | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_city_message() {
        let err = ProxyError::MissingCity;
        assert_eq!(
            err.to_string(),
            "Please pass a city name on the query string or in the request body"
        );
    }

    #[test]
    fn api_key_not_configured_message() {
        let err = ProxyError::ApiKeyNotConfigured;
        assert_eq!(err.to_string(), "OpenWeather API key is not configured.");
    }

    #[test]
    fn upstream_message_embeds_detail() {
        let err = ProxyError::Upstream(ForecastError::RequestFailed("HTTP 404".to_string()));
        assert_eq!(
            err.to_string(),
            "Error fetching weather data: Request failed: HTTP 404"
        );
    }

    #[test]
    fn missing_city_is_bad_request() {
        assert_eq!(ProxyError::MissingCity.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_side_errors_are_internal() {
        assert_eq!(
            ProxyError::ApiKeyNotConfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProxyError::Upstream(ForecastError::RequestFailed("x".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn into_response_missing_city() {
        let response = ProxyError::MissingCity.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_upstream() {
        let err = ProxyError::Upstream(ForecastError::ServiceUnavailable("HTTP 502".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn forecast_error_converts() {
        let err: ProxyError = ForecastError::RequestFailed("boom".to_string()).into();
        assert!(matches!(err, ProxyError::Upstream(_)));
    }
}
