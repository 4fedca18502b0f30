//! `clima` - current-location weather forecast for the terminal
//!
//! This library resolves the device's position, fetches a 5-period
//! forecast from OpenWeatherMap and renders it as a header plus forecast
//! cards, once per launch.

pub mod api;
pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod render;
pub mod screen;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use config::ClimaConfig;
pub use error::ClimaError;
pub use location::{ConfiguredLocationProvider, LocationProvider, LocationResolver, Permission};
pub use models::{City, Forecast, ForecastPeriod, Position};
pub use screen::{ForecastScreen, ScreenEvent, ScreenState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimaError>;
