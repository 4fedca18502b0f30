//! Weather API client for OpenWeatherMap integration
//!
//! HTTP client for the 5-day/3-hour forecast endpoint. One GET per screen
//! load with fixed query parameters; transport failures, non-2xx statuses
//! and malformed bodies all map to [`ClimaError::Fetch`] and are never
//! retried.

use crate::config::WeatherConfig;
use crate::error::ClimaError;
use crate::models::{openweather, Forecast, Position};
use crate::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Weather API client for OpenWeatherMap
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("clima/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Fetch the multi-period forecast for a resolved position
    ///
    /// The credential travels as the `appid` query parameter and never
    /// appears in logs.
    #[instrument(skip(self), fields(lat = position.latitude, lon = position.longitude))]
    pub async fn fetch_forecast(&self, position: &Position) -> Result<Forecast> {
        let url = format!("{}/forecast", self.base_url);

        info!(
            "Fetching forecast for coordinates: {}",
            position.format_coordinates()
        );
        debug!("Forecast request URL: {url}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", position.latitude.to_string()),
                ("lon", position.longitude.to_string()),
                ("units", self.units.clone()),
                ("lang", self.lang.clone()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: openweather::ForecastResponse = response.json().await.map_err(|e| {
            error!("Failed to parse forecast response: {e}");
            ClimaError::from(e)
        })?;

        let forecast = Forecast::from(body);
        info!(
            "Received forecast with {} periods for {}",
            forecast.periods.len(),
            forecast.city.name
        );

        Ok(forecast)
    }
}
