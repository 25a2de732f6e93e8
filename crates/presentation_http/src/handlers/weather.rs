//! Weather proxy handler
//!
//! Translates one inbound request into one outbound call to the
//! OpenWeatherMap forecast endpoint and relays the result.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::{error::ProxyError, state::AppState};

/// Query parameters accepted by the weather endpoint
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    /// City to look up; may instead arrive in the JSON body
    pub city: Option<String>,
}

/// JSON body accepted by the weather endpoint
#[derive(Debug, Deserialize)]
struct WeatherBody {
    city: Option<String>,
}

/// Proxy a forecast request to the upstream provider
///
/// GET|POST /api/weather
///
/// City extraction checks the query parameter first and falls back to the
/// JSON body; a body that fails to decode is treated the same as no body.
/// Validation runs before the outbound call, so a missing city (400) or a
/// missing API key (500) never produces upstream traffic. On success the
/// upstream body is returned byte for byte as JSON.
#[instrument(skip_all)]
pub async fn get_weather_data(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    info!("Weather proxy request received");

    let city = extract_city(params.city.as_deref(), &body).ok_or(ProxyError::MissingCity)?;

    let Some(api_key) = state.config.openweather.api_key() else {
        error!("OpenWeather API key is not configured.");
        return Err(ProxyError::ApiKeyNotConfigured);
    };

    let payload = state
        .forecast_client
        .fetch_by_city(&city, api_key)
        .await
        .map_err(|e| {
            warn!(error = %e, city = %city, "Upstream forecast request failed");
            ProxyError::from(e)
        })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        payload,
    )
        .into_response())
}

/// Extract the city from query parameter or JSON body, in that order
///
/// Empty strings count as absent on both paths.
fn extract_city(query_city: Option<&str>, body: &[u8]) -> Option<String> {
    if let Some(city) = query_city
        && !city.is_empty()
    {
        return Some(city.to_string());
    }

    serde_json::from_slice::<WeatherBody>(body)
        .ok()
        .and_then(|b| b.city)
        .filter(|city| !city.is_empty())
}
