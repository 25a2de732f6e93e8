//! weatherproxy infrastructure layer
//!
//! Configuration loading and validation for the proxy service.

pub mod config;

pub use config::{AppConfig, Environment, OpenWeatherConfig, ServerConfig};
