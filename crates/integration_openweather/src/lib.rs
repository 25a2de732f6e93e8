//! OpenWeatherMap forecast integration
//!
//! Client for the OpenWeatherMap 5 day / 3 hour forecast API
//! (<https://openweathermap.org/forecast5>). Requests carry a caller-supplied
//! API key and the upstream JSON body is relayed verbatim, without parsing.

pub mod client;

pub use client::{ForecastClient, ForecastConfig, ForecastError, OpenWeatherClient};
