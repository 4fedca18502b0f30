//! Error types and handling for the clima application

use thiserror::Error;

/// Main error type for the clima application
///
/// Every failure is terminal for the session: it stops the pipeline and
/// flips the screen to its failed state. Nothing is retried and nothing
/// crashes the process.
#[derive(Error, Debug)]
pub enum ClimaError {
    /// The host refused foreground location access
    #[error("location permission denied")]
    PermissionDenied,

    /// Permission was granted but no position fix could be obtained
    #[error("position unavailable: {message}")]
    PositionUnavailable { message: String },

    /// Transport failure, non-2xx response or malformed forecast body
    #[error("forecast request failed: {source}")]
    Fetch {
        #[from]
        source: reqwest::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Anything that does not fit the variants above
    #[error("{message}")]
    Unknown { message: String },
}

impl ClimaError {
    /// Create a new position-unavailable error
    pub fn position_unavailable<S: Into<String>>(message: S) -> Self {
        Self::PositionUnavailable {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn unknown<S: Into<String>>(message: S) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Get the user-facing message in the app's single hard-coded locale (pt-BR)
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClimaError::PermissionDenied => "Permissão de localização negada".to_string(),
            ClimaError::PositionUnavailable { .. } => {
                "Não foi possível obter a localização.".to_string()
            }
            ClimaError::Fetch { .. } => "Erro ao buscar a previsão do tempo.".to_string(),
            ClimaError::Config { .. } => {
                "Erro de configuração. Verifique o arquivo de configuração e a chave de API."
                    .to_string()
            }
            ClimaError::Unknown { message } => message.clone(),
        }
    }
}
