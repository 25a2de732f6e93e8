//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather proxy endpoint; GET and POST both carry the city input
        .route(
            "/api/weather",
            get(handlers::weather::get_weather_data).post(handlers::weather::get_weather_data),
        )
        // Attach state
        .with_state(state)
}
