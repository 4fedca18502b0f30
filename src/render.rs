//! Rendering of the forecast screen
//!
//! Pure, side-effect-free functions from screen state to text. Formatting
//! matches the shipped mobile screen bit for bit: America/Sao_Paulo
//! timestamps regardless of host timezone, one-decimal wind and
//! precipitation values, pt-BR strings.

use crate::models::{Forecast, ForecastPeriod};
use crate::screen::ScreenState;
use chrono::DateTime;
use chrono_tz::America::Sao_Paulo;

/// At most this many forecast cards are displayed
pub const MAX_CARDS: usize = 5;

/// Shown when the precipitation probability is exactly zero
pub const NO_RAIN_TEXT: &str = "Sem previsão de chuva";

/// Loading indicator line; absent once the screen has settled
pub const LOADING_INDICATOR: &str = "⌛ Carregando...";

const CITY_PLACEHOLDER: &str = "Carregando...";

/// Render the whole screen for the current state
pub fn render_screen(state: &ScreenState, icon_base_url: &str) -> String {
    match state {
        ScreenState::Init | ScreenState::Loading => {
            format!("{}\n{}\n", render_header(None), LOADING_INDICATOR)
        }
        ScreenState::Loaded { forecast } => {
            let mut out = render_header(Some(forecast));
            for period in forecast.periods.iter().take(MAX_CARDS) {
                out.push('\n');
                out.push_str(&render_card(period, icon_base_url));
            }
            out
        }
        ScreenState::Failed { message } => {
            format!("{message}\n\n{}", render_header(None))
        }
    }
}

/// Header with city name and coordinates; placeholders before data exists
fn render_header(forecast: Option<&Forecast>) -> String {
    match forecast {
        Some(forecast) => format!(
            "Clima Atual : {}\nLatitude: {} | Longitude: {}\n",
            forecast.city.name, forecast.city.latitude, forecast.city.longitude
        ),
        None => format!(
            "Clima Atual : {CITY_PLACEHOLDER}\nLatitude: -- | Longitude: --\n"
        ),
    }
}

/// One forecast-period card
fn render_card(period: &ForecastPeriod, icon_base_url: &str) -> String {
    let mut card = String::new();
    card.push_str(&format!(
        "{}  {}  [{}]\n",
        format_local_time(period.timestamp),
        format_temperature(period.temperature_celsius),
        icon_url(icon_base_url, &period.icon_id)
    ));
    card.push_str(&format!("  Clima: {}\n", period.description));
    card.push_str(&format!(
        "  Chuva: {}\n",
        format_precipitation(period.precipitation_probability)
    ));
    card.push_str(&format!("  Umidade: {}%\n", period.humidity_percent));
    card.push_str(&format!(
        "  Vento: {}\n",
        format_wind_speed(period.wind_speed_ms)
    ));
    card
}

/// Unix timestamp to local wall-clock time in the fixed display timezone
pub fn format_local_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| {
            dt.with_timezone(&Sao_Paulo)
                .format("%d/%m/%Y, %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "--".to_string())
}

/// Temperature as-is with the °C suffix, no rounding
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius}°C")
}

/// Wind speed converted from m/s to km/h, one decimal place
pub fn format_wind_speed(meters_per_second: f64) -> String {
    format!("{:.1} km/h", meters_per_second * 3.6)
}

/// Precipitation probability as a one-decimal percentage, or the fixed
/// no-rain string when it is exactly zero
pub fn format_precipitation(probability: f64) -> String {
    if probability > 0.0 {
        format!("{:.1}%", probability * 100.0)
    } else {
        NO_RAIN_TEXT.to_string()
    }
}

/// Remote icon image URL for a per-period icon identifier
pub fn icon_url(icon_base_url: &str, icon_id: &str) -> String {
    format!("{}/{}.png", icon_base_url.trim_end_matches('/'), icon_id)
}
