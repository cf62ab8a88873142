//! Where the catalog comes from.
//!
//! The workflow only needs [`CatalogSource::list`]. [`StaticCatalogSource`] serves
//! the built-in fixture; [`HttpCatalogSource`] fetches the same envelope from the
//! list endpoint and can replace it without touching anything else.

pub mod http_source;
pub mod static_source;

pub use http_source::*;
pub use static_source::*;

use crate::model::{ApiEnvelope, VariantRecord};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    /// Non-2xx response from the list endpoint.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The envelope carried `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The body was not a variant envelope.
    #[error("malformed catalog: {0}")]
    Decode(String),

    #[error("{0}")]
    Transport(String),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl From<reqwest::Error> for CatalogSourceError {
    fn from(e: reqwest::Error) -> Self {
        CatalogSourceError::Transport(e.to_string())
    }
}

/// Capability to produce the catalog the workflow starts from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list(&self) -> Result<Vec<VariantRecord>, CatalogSourceError>;
}

/// Unwraps a list envelope: `success: false` and a missing `data` are errors.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<VariantRecord>, CatalogSourceError> {
    let envelope: ApiEnvelope<Vec<VariantRecord>> =
        serde_json::from_slice(body).map_err(|e| CatalogSourceError::Decode(e.to_string()))?;
    if envelope.is_explicit_failure() {
        let message = envelope
            .message()
            .unwrap_or("Failed to load product variants")
            .to_string();
        return Err(CatalogSourceError::Rejected(message));
    }
    envelope
        .data
        .ok_or_else(|| CatalogSourceError::Decode("missing `data`".to_string()))
}
