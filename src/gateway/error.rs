//! Error types for the gateway and the update response decoder.

use crate::config::ConfigError;
use thiserror::Error;

/// Failures to obtain a response at all.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The endpoint could not be derived from configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never produced a complete response.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Transport(e.to_string())
    }
}

/// A submitted update that did not go through.
///
/// Every variant displays as its operator-facing message and nothing else.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpdateError {
    /// Non-2xx response.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose body carried `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    /// No response was received.
    #[error("{0}")]
    Transport(String),
}

impl UpdateError {
    pub fn message(&self) -> &str {
        match self {
            UpdateError::Http { message, .. } | UpdateError::Rejected { message } => message,
            UpdateError::Transport(message) => message,
        }
    }
}

impl From<GatewayError> for UpdateError {
    fn from(e: GatewayError) -> Self {
        UpdateError::Transport(e.to_string())
    }
}
