//! Configuration management for the clima application
//!
//! Handles loading configuration from a TOML file and environment
//! variables, and validates all settings at startup. The weather API
//! credential is injected here and never embedded in source.

use crate::error::ClimaError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the clima application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimaConfig {
    /// Weather API configuration
    pub weather: WeatherConfig,
    /// Position fix granted to the process by the host; absent means the
    /// host refused location access
    #[serde(default)]
    pub location: Option<LocationConfig>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key, injected via file or `CLIMA_WEATHER__API_KEY`
    pub api_key: String,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Unit system sent to the API
    #[serde(default = "default_units")]
    pub units: String,
    /// Display language code sent to the API
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Base URL for the remote weather icon images
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Coordinates granted to the process by the host platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "pt".to_string()
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
            units: default_units(),
            lang: default_lang(),
            icon_base_url: default_icon_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ClimaConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            location: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl ClimaConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ClimaError> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self, ClimaError> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with CLIMA_ prefix, e.g.
        // CLIMA_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("CLIMA")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClimaError::config(format!("Failed to build configuration: {e}")))?;

        let config: ClimaConfig = settings
            .try_deserialize()
            .map_err(|e| ClimaError::config(format!("Failed to deserialize configuration: {e}")))?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("clima").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<(), ClimaError> {
        self.validate_api_key()?;
        self.validate_location()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_api_key(&self) -> Result<(), ClimaError> {
        let api_key = self.weather.api_key.trim();

        if api_key.is_empty() {
            return Err(ClimaError::config(
                "Weather API key is required. Set it in the config file or via CLIMA_WEATHER__API_KEY.",
            ));
        }

        if api_key.len() < 8 || api_key.len() > 100 {
            return Err(ClimaError::config(
                "Weather API key appears to be invalid. Please check your API key.",
            ));
        }

        Ok(())
    }

    fn validate_location(&self) -> Result<(), ClimaError> {
        if let Some(location) = &self.location {
            if !(-90.0..=90.0).contains(&location.latitude) {
                return Err(ClimaError::config(format!(
                    "Latitude must be between -90 and 90, got: {}",
                    location.latitude
                )));
            }

            if !(-180.0..=180.0).contains(&location.longitude) {
                return Err(ClimaError::config(format!(
                    "Longitude must be between -180 and 180, got: {}",
                    location.longitude
                )));
            }
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<(), ClimaError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ClimaError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        for (name, url) in [
            ("base URL", &self.weather.base_url),
            ("icon base URL", &self.weather.icon_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ClimaError::config(format!(
                    "Weather API {name} must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        Ok(())
    }
}
