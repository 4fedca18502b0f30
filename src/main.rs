use anyhow::{Context, Result};
use clima::render::render_screen;
use clima::{ClimaConfig, ConfiguredLocationProvider, ForecastScreen, WeatherApiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClimaConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let provider = ConfiguredLocationProvider::new(config.location.as_ref());
    let client = WeatherApiClient::new(&config.weather)?;
    let screen = ForecastScreen::new(provider, client);

    let state = screen.run().await;
    print!("{}", render_screen(&state, &config.weather.icon_base_url));

    Ok(())
}
