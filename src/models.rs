//! Data models for the forecast screen
//!
//! Domain types held only in process memory for the lifetime of the
//! screen, plus the OpenWeatherMap wire types they are parsed from.
//! Nothing here is ever persisted; both entities are rebuilt from
//! scratch on every app start.

use serde::{Deserialize, Serialize};

/// A single latitude/longitude coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Position {
    /// Create a new position
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format position as a coordinates string
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// City metadata echoed back by the forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One discrete time-stamped prediction within the forecast list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_percent: u8,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    /// Precipitation probability as a fraction in [0, 1]
    pub precipitation_probability: f64,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Weather condition icon ID from the API
    pub icon_id: String,
}

/// Multi-period forecast for one city
///
/// The periods are ordered by time ascending, guaranteed by the upstream
/// API and not re-validated here. Only the first five are ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city: City,
    pub periods: Vec<ForecastPeriod>,
}

/// OpenWeatherMap `/data/2.5/forecast` response structures
///
/// Parsing into these typed structs is the schema validation at the
/// fetch boundary: a differently-shaped body fails the fetch instead of
/// surfacing as a rendering-time defect.
pub mod openweather {
    use serde::Deserialize;

    /// 5-day/3-hour forecast response from OpenWeatherMap
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub city: CityInfo,
        pub list: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CityInfo {
        pub name: String,
        pub coord: Coord,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    /// One 3-hour forecast entry
    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        pub dt: i64,
        pub main: MainInfo,
        #[serde(default)]
        pub weather: Vec<WeatherInfo>,
        pub wind: Option<WindInfo>,
        /// Precipitation probability, fraction in [0, 1]
        #[serde(default)]
        pub pop: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainInfo {
        pub temp: f64,
        #[serde(default)]
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct WeatherInfo {
        pub description: String,
        pub icon: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindInfo {
        pub speed: f64,
    }
}

// Convert OpenWeatherMap API responses to internal models
impl From<&openweather::ForecastItem> for ForecastPeriod {
    fn from(item: &openweather::ForecastItem) -> Self {
        let weather = item.weather.first();

        Self {
            timestamp: item.dt,
            temperature_celsius: item.main.temp,
            humidity_percent: item.main.humidity,
            wind_speed_ms: item.wind.as_ref().map(|w| w.speed).unwrap_or(0.0),
            precipitation_probability: item.pop,
            description: weather
                .map(|w| w.description.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            icon_id: weather.map(|w| w.icon.clone()).unwrap_or_default(),
        }
    }
}

impl From<openweather::ForecastResponse> for Forecast {
    fn from(response: openweather::ForecastResponse) -> Self {
        Self {
            city: City {
                name: response.city.name,
                latitude: response.city.coord.lat,
                longitude: response.city.coord.lon,
            },
            periods: response.list.iter().map(ForecastPeriod::from).collect(),
        }
    }
}
