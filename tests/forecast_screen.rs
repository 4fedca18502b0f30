//! Integration tests for the forecast screen pipeline using wiremock.
//!
//! These tests drive the whole sequence (permission, position, HTTP fetch,
//! rendering) against a mock forecast endpoint.

use clima::config::{LocationConfig, WeatherConfig};
use clima::render::{render_screen, LOADING_INDICATOR};
use clima::{ConfiguredLocationProvider, ForecastScreen, ScreenState, WeatherApiClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ICON_BASE: &str = "https://openweathermap.org/img/wn";

fn test_weather_config(base_url: &str) -> WeatherConfig {
    WeatherConfig {
        api_key: "test_api_key_123".to_string(),
        base_url: base_url.to_string(),
        units: "metric".to_string(),
        lang: "pt".to_string(),
        icon_base_url: ICON_BASE.to_string(),
        timeout_seconds: 5,
    }
}

fn granted_provider() -> ConfiguredLocationProvider {
    ConfiguredLocationProvider::new(Some(&LocationConfig {
        latitude: -23.55,
        longitude: -46.63,
    }))
}

fn denied_provider() -> ConfiguredLocationProvider {
    ConfiguredLocationProvider::new(None)
}

/// Forecast body with `n` three-hour periods starting at 2025-01-01T00:00Z
fn forecast_body(n: usize) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "dt": 1735689600 + i as i64 * 10800,
                "main": { "temp": 20.0 + i as f64, "humidity": 70 + i },
                "weather": [ { "description": "céu limpo", "icon": "01d" } ],
                "wind": { "speed": 3.5 },
                "pop": 0.2
            })
        })
        .collect();

    serde_json::json!({
        "city": {
            "name": "São Paulo",
            "coord": { "lat": -23.55, "lon": -46.63 }
        },
        "list": list
    })
}

async fn run_screen(server: &MockServer, provider: ConfiguredLocationProvider) -> ScreenState {
    let client = WeatherApiClient::new(&test_weather_config(&server.uri())).unwrap();
    ForecastScreen::new(provider, client).run().await
}

#[tokio::test]
async fn test_six_periods_render_exactly_five_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(6)))
        .mount(&mock_server)
        .await;

    let state = run_screen(&mock_server, granted_provider()).await;

    let forecast = match &state {
        ScreenState::Loaded { forecast } => forecast,
        other => panic!("Expected Loaded, got {other:?}"),
    };
    assert_eq!(forecast.periods.len(), 6);

    let out = render_screen(&state, ICON_BASE);
    assert_eq!(out.matches("Clima:").count(), 5);

    // Cards keep the input order and the sixth period never renders
    let positions: Vec<usize> = (0..5)
        .map(|i| out.find(&format!("{}°C", 20.0 + i as f64)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!out.contains("25°C"));
}

#[tokio::test]
async fn test_request_carries_fixed_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "-23.55"))
        .and(query_param("lon", "-46.63"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "pt"))
        .and(query_param("appid", "test_api_key_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = run_screen(&mock_server, granted_provider()).await;
    assert!(matches!(state, ScreenState::Loaded { .. }));
}

#[tokio::test]
async fn test_http_500_fails_screen_with_no_partial_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let state = run_screen(&mock_server, granted_provider()).await;

    assert_eq!(
        state,
        ScreenState::Failed {
            message: "Erro ao buscar a previsão do tempo.".to_string()
        }
    );

    let out = render_screen(&state, ICON_BASE);
    assert!(!out.contains("Clima:"));
    assert!(!out.contains(LOADING_INDICATOR));
}

#[tokio::test]
async fn test_malformed_body_fails_screen() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a forecast"))
        .mount(&mock_server)
        .await;

    let state = run_screen(&mock_server, granted_provider()).await;
    assert!(matches!(state, ScreenState::Failed { .. }));
}

#[tokio::test]
async fn test_permission_denied_makes_no_http_call() {
    let mock_server = MockServer::start().await;

    // Zero outbound calls expected; verified when the server drops
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(1)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let state = run_screen(&mock_server, denied_provider()).await;

    assert_eq!(
        state,
        ScreenState::Failed {
            message: "Permissão de localização negada".to_string()
        }
    );

    let out = render_screen(&state, ICON_BASE);
    assert!(out.starts_with("Permissão de localização negada"));
    assert!(!out.contains(LOADING_INDICATOR));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_fewer_than_five_periods_render_fewer_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(2)))
        .mount(&mock_server)
        .await;

    let state = run_screen(&mock_server, granted_provider()).await;
    let out = render_screen(&state, ICON_BASE);

    assert_eq!(out.matches("Clima:").count(), 2);
    assert!(out.contains("Clima Atual : São Paulo"));
    assert!(out.contains("Latitude: -23.55 | Longitude: -46.63"));
}
