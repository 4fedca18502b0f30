//! Forecast screen state machine and sequential pipeline
//!
//! The screen moves through four linear states,
//! `Init -> Loading -> (Loaded | Failed)`, transitioned by a pure reducer.
//! Events arriving after a terminal state are absorbed, so a session never
//! returns to `Loading` once it has settled.

use crate::api::WeatherApiClient;
use crate::location::{LocationProvider, LocationResolver};
use crate::models::Forecast;
use tracing::{info, warn};

/// Immutable screen state value
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    /// No location attempted yet
    Init,
    /// Location resolution or fetch in flight
    Loading,
    /// Forecast present; header and cards can render
    Loaded { forecast: Forecast },
    /// Terminal failure; only the message renders, no retry is offered
    Failed { message: String },
}

/// Events driving the screen reducer
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    Started,
    ForecastLoaded(Forecast),
    StepFailed(String),
}

impl ScreenState {
    /// Pure reducer from state and event to the next state
    pub fn apply(self, event: ScreenEvent) -> ScreenState {
        match (self, event) {
            (ScreenState::Init, ScreenEvent::Started) => ScreenState::Loading,
            (ScreenState::Loading, ScreenEvent::ForecastLoaded(forecast)) => {
                ScreenState::Loaded { forecast }
            }
            (ScreenState::Loading, ScreenEvent::StepFailed(message)) => {
                ScreenState::Failed { message }
            }
            // Terminal states absorb everything; out-of-order events are
            // dropped rather than re-entering Loading
            (state, event) => {
                warn!("Ignoring out-of-order screen event: {event:?}");
                state
            }
        }
    }

    /// Whether the screen has settled in `Loaded` or `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenState::Loaded { .. } | ScreenState::Failed { .. })
    }
}

/// Drives the strictly sequential pipeline: resolve position, fetch the
/// forecast, settle the screen in a terminal state. The fetch never starts
/// before a resolved position exists.
pub struct ForecastScreen<P> {
    provider: P,
    client: WeatherApiClient,
    state: ScreenState,
}

impl<P: LocationProvider> ForecastScreen<P> {
    /// Create a screen in its initial state
    pub fn new(provider: P, client: WeatherApiClient) -> Self {
        Self {
            provider,
            client,
            state: ScreenState::Init,
        }
    }

    /// Current screen state
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Run the screen's load sequence once
    ///
    /// Every failure path deterministically reaches `Failed`; the screen
    /// can never end the run stuck in `Loading`. Permission denial stops
    /// the pipeline before any outbound request.
    pub async fn run(mut self) -> ScreenState {
        self.state = self.state.apply(ScreenEvent::Started);

        let position = match LocationResolver::resolve(&self.provider).await {
            Ok(position) => position,
            Err(e) => {
                info!("Location resolution failed: {e}");
                return self.state.apply(ScreenEvent::StepFailed(e.user_message()));
            }
        };

        match self.client.fetch_forecast(&position).await {
            Ok(forecast) => self.state.apply(ScreenEvent::ForecastLoaded(forecast)),
            Err(e) => {
                info!("Forecast fetch failed: {e}");
                self.state.apply(ScreenEvent::StepFailed(e.user_message()))
            }
        }
    }
}
